use super::tab_label;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{ProgressMeter, StatusPill};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::learner::fixtures;
use contracts::domain::learner::progress::{trainings_in_tab, TrainingStats};
use contracts::domain::learner::{Training, TrainingStatus};
use contracts::shared::search::ALL;
use leptos::prelude::*;
use thaw::*;

#[component]
fn TrainingRow(training: Training) -> impl IntoView {
    let toast = use_toast();
    let status = training.status;
    let started = status != TrainingStatus::NotStarted;
    let action = status.action_label();
    let (action_icon, appearance) = match status {
        TrainingStatus::Completed => ("check-circle", ButtonAppearance::Secondary),
        _ => ("play-circle", ButtonAppearance::Primary),
    };
    let name = training.name.clone();

    view! {
        <div class="training-row">
            <div class="training-row__main">
                <div class="training-row__title">
                    <h3>{training.name.clone()}</h3>
                    <StatusPill variant=status.badge_class()>{status.display_name()}</StatusPill>
                </div>
                <p class="text-muted">{training.description.clone()}</p>
                {started.then(|| view! {
                    <div class="training-row__progress">
                        <span class="text-muted">"Progress"</span>
                        <ProgressMeter percent=u32::from(training.progress) />
                    </div>
                })}
                <div class="training-row__facts text-muted">
                    <span>{icon("book-open")}{format!(" {}/{} Modules", training.completed_modules, training.total_modules)}</span>
                    <span>{icon("clock")}{format!(" {}", training.duration)}</span>
                    {(training.deadline != "-").then(|| view! {
                        <span>{icon("calendar")}{format!(" Due: {}", training.deadline)}</span>
                    })}
                    {(training.last_accessed != "-").then(|| view! {
                        <span>{format!("Last accessed: {}", training.last_accessed)}</span>
                    })}
                </div>
                <div class="training-row__flags">
                    {training.assessment_required.then(|| view! {
                        <StatusPill variant="status-pill--outline">"Assessment Required"</StatusPill>
                    })}
                    {training.certificate_available.then(|| view! {
                        <StatusPill variant="status-pill--outline">"Certificate Available"</StatusPill>
                    })}
                </div>
            </div>
            <Button
                appearance=appearance
                size=ButtonSize::Small
                on_click=move |_| {
                    log::info!("training '{}' opened ({})", name, action);
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
pub fn LearnerTrainingsPage() -> impl IntoView {
    let trainings = StoredValue::new(fixtures::trainings());
    let tab = RwSignal::new(ALL.to_string());
    let stats = trainings.with_value(|ts| TrainingStats::of(ts));

    let visible = Memo::new(move |_| {
        let tab = tab.get();
        trainings.with_value(|ts| trainings_in_tab(ts, &tab).into_iter().cloned().collect::<Vec<Training>>())
    });

    view! {
        <PageFrame page_id="learner--trainings" category=PAGE_CAT_LIST>
            <PageHeader title="My Trainings" subtitle="View and manage your assigned training courses" />

            <div class="stat-grid">
                <StatCard label="Total Courses" icon_name="book-open" tone=StatTone::Info value=stats.total.to_string() />
                <StatCard label="In Progress" icon_name="play-circle" tone=StatTone::Warning value=stats.in_progress.to_string() />
                <StatCard label="Completed" icon_name="check-circle" tone=StatTone::Success value=stats.completed.to_string() />
                <StatCard label="Not Started" icon_name="lock" value=stats.not_started.to_string() />
            </div>

            <Card>
                <TabList selected_value=tab>
                    <Tab value=ALL>{tab_label("All", stats.total)}</Tab>
                    <Tab value=TrainingStatus::InProgress.code()>{tab_label("In Progress", stats.in_progress)}</Tab>
                    <Tab value=TrainingStatus::Completed.code()>{tab_label("Completed", stats.completed)}</Tab>
                    <Tab value=TrainingStatus::NotStarted.code()>{tab_label("Not Started", stats.not_started)}</Tab>
                </TabList>
                <div class="training-list">
                    <For
                        each=move || visible.get()
                        key=|t| t.id
                        children=move |t: Training| view! { <TrainingRow training=t /> }
                    />
                </div>
            </Card>
        </PageFrame>
    }
}
