//! Trainer portal pages. All lists start from the fixture data and are
//! mutated in place; a remount starts over.

pub mod assessments;
pub mod attendance;
pub mod certificates;
pub mod content_hub;
pub mod courses;
pub mod dashboard;
pub mod events;
pub mod feedback;
pub mod groups;
pub mod reports;
pub mod settings;
pub mod users;

use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::shared::search::ALL;
use leptos::prelude::*;
use thaw::*;

/// `status-pill--{variant}` for the `badge_variant()` codes of the records
pub(crate) fn pill(variant: &str) -> String {
    format!("status-pill--{}", variant)
}

/// Dropdown with an "all" entry followed by `options` as `(value, label)`
#[component]
pub(crate) fn OptionFilter(
    value: RwSignal<String>,
    all_label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="list-filters__select">
            <Select value=value>
                <option value=ALL>{all_label}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(v, label)| view! { <option value=v>{label}</option> })
                        .collect_view()
                }}
            </Select>
        </div>
    }
}

/// Export buttons; nothing is generated, the toast confirms the request
#[component]
pub(crate) fn ExportButtons(
    /// e.g. "attendance" -> "Exporting attendance as PDF..."
    subject: &'static str,
    formats: &'static [&'static str],
) -> impl IntoView {
    let toast = use_toast();
    formats
        .iter()
        .map(|format| {
            let format = *format;
            view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        log::info!("export of {} requested as {}", subject, format);
                        toast.success(format!("Exporting {} as {}...", subject, format));
                    }
                >
                    {icon("download")}
                    {format!(" {}", format)}
                </Button>
            }
        })
        .collect_view()
}

/// Filled and empty stars for a 1..=5 rating
pub(crate) fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn pill_prefixes_variant() {
        assert_eq!(pill("error"), "status-pill--error");
    }
}
