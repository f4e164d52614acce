use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::remove_by_id;
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::forms::AssessmentDraft;
use contracts::domain::trainer::{Assessment, AssessmentStatus, QuestionType};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

fn question_type_option(kind: QuestionType) -> &'static str {
    match kind {
        QuestionType::Mcq => "Multiple Choice (MCQ)",
        QuestionType::Scenario => "Scenario Based",
        QuestionType::Mixed => "Mixed",
    }
}

/// Three numeric dialog fields, all or nothing
fn parse_limits(passing: &str, attempts: &str, minutes: &str) -> Option<(u32, u32, u32)> {
    Some((
        passing.trim().parse().ok()?,
        attempts.trim().parse().ok()?,
        minutes.trim().parse().ok()?,
    ))
}

#[component]
fn AssessmentCard(assessment: Assessment, on_delete: Callback<String>) -> impl IntoView {
    let toast = use_toast();
    let id = assessment.id.clone();
    let title = assessment.name.clone();
    let (status_label, status_variant) = match assessment.status {
        AssessmentStatus::Active => ("Active", "status-pill--primary"),
        AssessmentStatus::Draft => ("Draft", "status-pill--neutral"),
    };

    view! {
        <Card class="assessment-card">
            <div class="assessment-card__header">
                <div>
                    <div class="assessment-card__title-row">
                        <h3>{assessment.name.clone()}</h3>
                        <StatusPill variant=status_variant>{status_label}</StatusPill>
                    </div>
                    <p class="text-muted">{assessment.course.clone()}</p>
                </div>
                <div class="row-actions">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        attr:title="Preview"
                        on_click=move |_| toast.info(format!("Previewing {}", title))
                    >
                        {icon("eye")}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        attr:title="Delete"
                        class="row-actions__danger"
                        on_click=move |_| on_delete.run(id.clone())
                    >
                        {icon("trash")}
                    </Button>
                </div>
            </div>
            <dl class="assessment-card__facts">
                <dt>"Type"</dt>
                <dd><StatusPill variant="status-pill--outline">{assessment.question_type.display_name()}</StatusPill></dd>
                <dt>"Passing Score"</dt>
                <dd>{format!("{}%", assessment.passing_score)}</dd>
                <dt>"Max Attempts"</dt>
                <dd>{assessment.max_attempts}</dd>
                <dt>"Time Limit"</dt>
                <dd>{format!("{} min", assessment.time_limit)}</dd>
                <dt>"Questions"</dt>
                <dd>{assessment.total_questions}</dd>
            </dl>
        </Card>
    }
}

#[component]
pub fn TrainerAssessmentsPage() -> impl IntoView {
    let toast = use_toast();
    let assessments = RwSignal::new(fixtures::assessments());
    let course_names: Vec<String> = fixtures::courses().into_iter().map(|c| c.name).collect();

    let defaults = AssessmentDraft::default();
    let create_open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let course = RwSignal::new(String::new());
    let question_type = RwSignal::new(defaults.question_type.code().to_string());
    let passing = RwSignal::new(defaults.passing_score.to_string());
    let attempts = RwSignal::new(defaults.max_attempts.to_string());
    let minutes = RwSignal::new(defaults.time_limit.to_string());

    let create = move |_: leptos::ev::MouseEvent| {
        let limits = parse_limits(
            &passing.get_untracked(),
            &attempts.get_untracked(),
            &minutes.get_untracked(),
        );
        let Some((passing_score, max_attempts, time_limit)) = limits else {
            toast.error("Passing %, attempts and time must be whole numbers");
            return;
        };
        let draft = AssessmentDraft {
            name: name.get_untracked(),
            course: course.get_untracked(),
            question_type: QuestionType::from_code(&question_type.get_untracked())
                .unwrap_or(QuestionType::Mcq),
            passing_score,
            max_attempts,
            time_limit,
        };
        match draft.into_assessment(Uuid::new_v4().to_string()) {
            Ok(a) => {
                log::info!("assessment {} created for {}", a.id, a.course);
                assessments.update(|list| list.push(a));
                name.set(String::new());
                course.set(String::new());
                create_open.set(false);
                toast.success("Assessment created successfully");
            }
            Err(e) => toast.error(e.message()),
        }
    };

    let on_delete = Callback::new(move |id: String| {
        if assessments
            .try_update(|list| remove_by_id(list, &id, |a| a.id.as_str()))
            .unwrap_or(false)
        {
            toast.success("Assessment deleted");
        }
    });

    view! {
        <PageFrame page_id="trainer--assessments" category=PAGE_CAT_LIST>
            <PageHeader title="Assessments" subtitle="Create and manage assessments for your courses">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| create_open.set(true)>
                    {icon("plus")}
                    " Create Assessment"
                </Button>
            </PageHeader>

            <div class="card-grid">
                <For
                    each=move || assessments.get()
                    key=|a| a.id.clone()
                    children=move |a: Assessment| view! { <AssessmentCard assessment=a on_delete=on_delete /> }
                />
            </div>

            <Dialog open=create_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Create New Assessment"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">"Configure a new assessment for a course"</p>
                            <Flex vertical=true>
                                <Label>"Assessment Title *"</Label>
                                <Input value=name placeholder="Enter assessment title" />
                                <Label>"Linked Course *"</Label>
                                <Select value=course>
                                    <option value="">"Select course"</option>
                                    {course_names
                                        .into_iter()
                                        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                        .collect_view()}
                                </Select>
                                <Label>"Question Type"</Label>
                                <Select value=question_type>
                                    {QuestionType::all()
                                        .into_iter()
                                        .map(|q| view! { <option value=q.code()>{question_type_option(q)}</option> })
                                        .collect_view()}
                                </Select>
                                <Flex>
                                    <Flex vertical=true>
                                        <Label>"Passing %"</Label>
                                        <Input value=passing input_type=InputType::Number />
                                    </Flex>
                                    <Flex vertical=true>
                                        <Label>"Max Attempts"</Label>
                                        <Input value=attempts input_type=InputType::Number />
                                    </Flex>
                                    <Flex vertical=true>
                                        <Label>"Time (min)"</Label>
                                        <Input value=minutes input_type=InputType::Number />
                                    </Flex>
                                </Flex>
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| create_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=create>
                                "Create Assessment"
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
    fn limits_need_all_three_numbers() {
        assert_eq!(parse_limits("80", " 3 ", "60"), Some((80, 3, 60)));
        assert_eq!(parse_limits("80", "", "60"), None);
        assert_eq!(parse_limits("-1", "3", "60"), None);
    }
}
