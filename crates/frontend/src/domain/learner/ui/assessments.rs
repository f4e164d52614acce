use super::tab_label;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{ProgressMeter, StatusPill};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::learner::fixtures;
use contracts::domain::learner::progress::{assessments_in_tab, AssessmentStats, AttemptPrompt};
use contracts::domain::learner::{AttemptStatus, LearnerAssessment};
use contracts::shared::search::ALL;
use leptos::prelude::*;
use thaw::*;

const PREPARATION_TIPS: &[&str] = &[
    "Review all course materials thoroughly",
    "Ensure you have a stable internet connection",
    "Set aside uninterrupted time for the assessment",
    "Read each question carefully before answering",
];

const DEACTIVATION_STEPS: &[&str] = &[
    "Your trainer has been notified",
    "You will need to complete additional training",
    "Only your trainer can reactivate your account",
    "Contact your trainer for next steps",
];

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="notice-list">
            {items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
        </ul>
    }
}

/// Body text of the remaining-attempts dialog
fn warning_text(prompt: AttemptPrompt) -> Option<String> {
    match prompt {
        AttemptPrompt::Warning { final_attempt: true, .. } => Some(
            "This is your FINAL attempt! If you fail this assessment, your account will be temporarily \
             deactivated and you will need to contact your trainer to reactivate it."
                .to_string(),
        ),
        AttemptPrompt::Warning { remaining, .. } => Some(format!(
            "You have {} attempt(s) remaining. Make sure you are prepared before starting the assessment.",
            remaining
        )),
        AttemptPrompt::Proceed | AttemptPrompt::Deactivated => None,
    }
}

#[component]
fn AssessmentRow(assessment: LearnerAssessment, on_attempt: Callback<(LearnerAssessment, AttemptPrompt)>) -> impl IntoView {
    let toast = use_toast();
    let status = assessment.status;
    let attempts_class = format!("assessment-row__attempts {}", assessment.attempts_class());
    let score_view = assessment.score.map(|score| {
        let passed = score >= assessment.passing_score;
        let score_class = if passed { "score score--good" } else { "score score--bad" };
        view! {
            <div class="assessment-row__score">
                <div>
                    <p class="text-muted">"Your Score"</p>
                    <span class=score_class>{format!("{}%", score)}</span>
                </div>
                <ProgressMeter percent=score hide_label=true />
                {assessment.last_attempt.clone().map(|d| view! {
                    <p class="text-muted">{format!("Last attempt: {}", d)}</p>
                })}
            </div>
        }
    });

    let action = match status {
        AttemptStatus::Pending => {
            let a = assessment.clone();
            Some(view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_attempt.run((a.clone(), a.start_prompt()))
                >
                    {icon("play-circle")}
                    " Start Assessment"
                </Button>
            }
            .into_any())
        }
        AttemptStatus::Failed if assessment.can_retry() => {
            let a = assessment.clone();
            let label = format!(" Retry ({} left)", a.remaining_attempts());
            Some(view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_attempt.run((a.clone(), a.retry_prompt()))
                >
                    {icon("rotate-ccw")}
                    {label}
                </Button>
            }
            .into_any())
        }
        AttemptStatus::Passed => {
            let name = assessment.name.clone();
            Some(view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| toast.info(format!("Opening results for {}...", name))
                >
                    {icon("check-circle")}
                    " View Results"
                </Button>
            }
            .into_any())
        }
        AttemptStatus::Failed => None,
    };

    view! {
        <div class="assessment-row">
            <div class="assessment-row__main">
                <div class="assessment-row__title">
                    <h3>{assessment.name.clone()}</h3>
                    <StatusPill variant=status.badge_class()>{status.display_name()}</StatusPill>
                </div>
                <p class="text-muted">{assessment.course.clone()}</p>
                <dl class="assessment-row__facts">
                    <div><dt>"Duration"</dt><dd>{icon("clock")}{format!(" {}", assessment.duration)}</dd></div>
                    <div><dt>"Questions"</dt><dd>{assessment.questions}</dd></div>
                    <div><dt>"Passing Score"</dt><dd>{format!("{}%", assessment.passing_score)}</dd></div>
                    <div><dt>"Attempts"</dt><dd class=attempts_class>{assessment.attempts_label()}</dd></div>
                </dl>
                {score_view}
            </div>
            <div class="assessment-row__actions">{action}</div>
        </div>
    }
}

#[component]
pub fn LearnerAssessmentsPage() -> impl IntoView {
    let toast = use_toast();
    let assessments = StoredValue::new(fixtures::assessments());
    let tab = RwSignal::new(ALL.to_string());
    let stats = assessments.with_value(|xs| AssessmentStats::of(xs));

    let pending_prompt = RwSignal::new(None::<(LearnerAssessment, AttemptPrompt)>);
    let warning_open = RwSignal::new(false);
    let deactivated_open = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        let tab = tab.get();
        assessments.with_value(|xs| {
            assessments_in_tab(xs, &tab)
                .into_iter()
                .cloned()
                .collect::<Vec<LearnerAssessment>>()
        })
    });

    let on_attempt = Callback::new(move |(a, prompt): (LearnerAssessment, AttemptPrompt)| {
        log::info!("attempt requested for assessment {}: {:?}", a.id, prompt);
        match prompt {
            AttemptPrompt::Proceed => toast.info(format!("Starting {}...", a.name)),
            AttemptPrompt::Warning { .. } => {
                pending_prompt.set(Some((a, prompt)));
                warning_open.set(true);
            }
            AttemptPrompt::Deactivated => {
                pending_prompt.set(Some((a, prompt)));
                deactivated_open.set(true);
            }
        }
    });

    let confirm_start = move |_: leptos::ev::MouseEvent| {
        if let Some((a, _)) = pending_prompt.get_untracked() {
            toast.info(format!("Starting {}...", a.name));
        }
        warning_open.set(false);
    };

    view! {
        <PageFrame page_id="learner--assessments" category=PAGE_CAT_LIST>
            <PageHeader title="Assessments" subtitle="Complete assessments to earn your certifications" />

            <div class="stat-grid">
                <StatCard label="Total" icon_name="file-text" tone=StatTone::Info value=stats.total.to_string() />
                <StatCard label="Pending" icon_name="clock" tone=StatTone::Warning value=stats.pending.to_string() />
                <StatCard label="Passed" icon_name="check-circle" tone=StatTone::Success value=stats.passed.to_string() />
                <StatCard label="Failed" icon_name="x-circle" tone=StatTone::Error value=stats.failed.to_string() />
            </div>

            <Card class="notice notice--warning">
                <h4>{icon("alert-triangle")}" Important Assessment Rules"</h4>
                <p>
                    "You have a maximum of 3 attempts per assessment. After 3 failed attempts, your account will be \
                     temporarily deactivated and a trainer will need to reactivate it."
                </p>
            </Card>

            <Card>
                <TabList selected_value=tab>
                    <Tab value=ALL>{tab_label("All", stats.total)}</Tab>
                    <Tab value=AttemptStatus::Pending.code()>{tab_label("Pending", stats.pending)}</Tab>
                    <Tab value=AttemptStatus::Passed.code()>{tab_label("Passed", stats.passed)}</Tab>
                    <Tab value=AttemptStatus::Failed.code()>{tab_label("Failed", stats.failed)}</Tab>
                </TabList>
                <div class="assessment-list">
                    <For
                        each=move || visible.get()
                        key=|a| a.id
                        children=move |a: LearnerAssessment| view! { <AssessmentRow assessment=a on_attempt=on_attempt /> }
                    />
                </div>
            </Card>

            <Dialog open=warning_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>{icon("alert-triangle")}" Warning: Limited Attempts Remaining"</DialogTitle>
                        <DialogContent>
                            {move || {
                                pending_prompt.get().and_then(|(_, p)| {
                                    let class = match p {
                                        AttemptPrompt::Warning { final_attempt: true, .. } => "text-danger",
                                        _ => "text-muted",
                                    };
                                    warning_text(p).map(|t| view! { <p class=class>{t}</p> })
                                })
                            }}
                            <div class="notice notice--warning">
                                <h4>"Before you start:"</h4>
                                {bullet_list(PREPARATION_TIPS)}
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| warning_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=confirm_start>
                                "I Understand, Continue"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <Dialog open=deactivated_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>{icon("x-circle")}" Account Temporarily Deactivated"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">
                                "You have exhausted all 3 attempts for this assessment. Your account has been temporarily deactivated."
                            </p>
                            <div class="notice notice--error">
                                <h4>"What happens next?"</h4>
                                {bullet_list(DEACTIVATION_STEPS)}
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| deactivated_open.set(false)>
                                "Close"
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
    fn final_attempt_gets_strong_warning() {
        let text = warning_text(AttemptPrompt::Warning {
            remaining: 1,
            final_attempt: true,
        });
        assert!(text.is_some_and(|t| t.starts_with("This is your FINAL attempt!")));
    }

    #[test]
    fn warning_counts_remaining_attempts() {
        let text = warning_text(AttemptPrompt::Warning {
            remaining: 2,
            final_attempt: false,
        });
        assert_eq!(
            text.as_deref(),
            Some("You have 2 attempt(s) remaining. Make sure you are prepared before starting the assessment.")
        );
        assert_eq!(warning_text(AttemptPrompt::Proceed), None);
    }
}
