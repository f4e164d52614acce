use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{ProgressMeter, StatusPill};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BROWSE;
use crate::shared::toast::use_toast;
use contracts::domain::learner::fixtures;
use contracts::domain::learner::progress::{count_modules, group_by_course};
use contracts::domain::learner::{LibraryModule, MediaKind, ModuleStatus};
use leptos::prelude::*;
use thaw::*;

fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "VIDEO",
        MediaKind::Pdf => "PDF",
        MediaKind::Xr => "XR",
    }
}

fn status_variant(status: ModuleStatus) -> &'static str {
    match status {
        ModuleStatus::Completed => "status-pill--success",
        ModuleStatus::InProgress => "status-pill--warning",
        ModuleStatus::Locked => "status-pill--neutral",
    }
}

#[component]
fn ModuleRow(module: LibraryModule, position: usize, on_locked: Callback<LibraryModule>) -> impl IntoView {
    let toast = use_toast();
    let locked = module.is_locked;
    let status = module.status;
    let action = module.action_label();
    let row_class = if locked {
        "library-row library-row--locked"
    } else {
        "library-row"
    };
    let marker = match status {
        ModuleStatus::Completed => view! {
            <span class="library-row__marker library-row__marker--done">{icon("check-circle")}</span>
        }
        .into_any(),
        _ if locked => view! {
            <span class="library-row__marker">{icon("lock")}</span>
        }
        .into_any(),
        ModuleStatus::InProgress => view! {
            <span class="library-row__marker library-row__marker--active">{position}</span>
        }
        .into_any(),
        ModuleStatus::Locked => view! { <span class="library-row__marker">{position}</span> }.into_any(),
    };
    let action_icon = match (locked, status) {
        (true, _) => "lock",
        (false, ModuleStatus::Completed) => "check-circle",
        _ => "play-circle",
    };
    let appearance = if locked || status == ModuleStatus::Completed {
        ButtonAppearance::Secondary
    } else {
        ButtonAppearance::Primary
    };
    let name = module.name.clone();
    let clicked = module.clone();

    view! {
        <div
            class=row_class
            on:click=move |_| {
                if locked {
                    on_locked.run(clicked.clone());
                }
            }
        >
            {marker}
            <div class="library-row__body">
                <div class="library-row__title">
                    <h4>{module.name.clone()}</h4>
                    <StatusPill variant=status_variant(status)>{status.display_name()}</StatusPill>
                </div>
                <div class="library-row__facts text-muted">
                    <span>{icon(module.kind.icon_name())}{format!(" {}", kind_label(module.kind))}</span>
                    <span>{icon("clock")}{format!(" {}", module.duration)}</span>
                </div>
                {(status == ModuleStatus::InProgress).then(|| view! {
                    <div class="library-row__progress">
                        <ProgressMeter percent=u32::from(module.progress) hide_label=true />
                        <span class="text-muted">{format!("{}% complete", module.progress)}</span>
                    </div>
                })}
            </div>
            <Button
                size=ButtonSize::Small
                appearance=appearance
                disabled=locked
                on_click=move |_| {
                    log::info!("library module '{}' opened ({})", name, action);
                    toast.info(format!("Opening {}...", name));
                }
            >
                {icon(action_icon)}
                {format!(" {}", action)}
            </Button>
        </div>
    }
}

#[component]
pub fn LearnerLibraryPage() -> impl IntoView {
    let modules = fixtures::library_modules();
    let lock_open = RwSignal::new(false);
    let locked_module = RwSignal::new(None::<LibraryModule>);

    let on_locked = Callback::new(move |m: LibraryModule| {
        locked_module.set(Some(m));
        lock_open.set(true);
    });

    let groups = group_by_course(&modules)
        .into_iter()
        .map(|g| {
            let completed = g.progress_label();
            let percent = g.progress();
            let course = g.course.to_string();
            let rows = g
                .modules
                .into_iter()
                .enumerate()
                .map(|(i, m)| view! { <ModuleRow module=m.clone() position={i + 1} on_locked=on_locked /> })
                .collect_view();
            view! {
                <Card class="library-course">
                    <div class="library-course__head">
                        <h3>{icon("book-open")}{format!(" {}", course)}</h3>
                        <div class="library-course__progress">
                            <span class="text-muted">{completed}</span>
                            <ProgressMeter percent=percent hide_label=true />
                        </div>
                    </div>
                    {rows}
                </Card>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="learner--library" category=PAGE_CAT_BROWSE>
            <PageHeader title="Learning Library" subtitle="Access your course modules and learning materials" />

            <div class="stat-grid">
                <StatCard label="Total Modules" icon_name="book-open" tone=StatTone::Info value=modules.len().to_string() />
                <StatCard
                    label="Completed"
                    icon_name="check-circle"
                    tone=StatTone::Success
                    value=count_modules(&modules, ModuleStatus::Completed).to_string()
                />
                <StatCard
                    label="In Progress"
                    icon_name="play-circle"
                    tone=StatTone::Warning
                    value=count_modules(&modules, ModuleStatus::InProgress).to_string()
                />
                <StatCard label="Locked" icon_name="lock" value=count_modules(&modules, ModuleStatus::Locked).to_string() />
            </div>

            {groups}

            <Dialog open=lock_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>{icon("alert-triangle")}" Module Locked"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">
                                "This module is currently locked. You must complete the previous modules in sequence before accessing this content."
                            </p>
                            {move || locked_module.get().map(|m| view! {
                                <div class="lock-notice">
                                    <strong>{m.name}</strong>
                                    <p class="text-muted">
                                        {format!("Please complete all previous modules in \"{}\" to unlock this content.", m.course)}
                                    </p>
                                </div>
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| lock_open.set(false)>
                                "Understood"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_are_upper_case() {
        assert_eq!(kind_label(MediaKind::Video), "VIDEO");
        assert_eq!(kind_label(MediaKind::Xr), "XR");
    }

    #[test]
    fn locked_rows_use_neutral_pill() {
        assert_eq!(status_variant(ModuleStatus::Locked), "status-pill--neutral");
        assert_eq!(status_variant(ModuleStatus::Completed), "status-pill--success");
    }
}
