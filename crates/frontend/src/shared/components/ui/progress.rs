use leptos::prelude::*;
use thaw::ProgressBar;

/// Percentage bar with the number next to it
#[component]
pub fn ProgressMeter(
    /// 0..=100
    #[prop(into)]
    percent: Signal<u32>,
    #[prop(optional)] hide_label: bool,
) -> impl IntoView {
    let ratio = Signal::derive(move || f64::from(percent.get().min(100)) / 100.0);

    view! {
        <div class="progress-meter">
            <div class="progress-meter__bar">
                <ProgressBar value=ratio />
            </div>
            {(!hide_label).then(|| view! {
                <span class="progress-meter__label">{move || format!("{}%", percent.get())}</span>
            })}
        </div>
    }
}
