use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::remove_by_id;
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::forms::CourseDraft;
use contracts::domain::trainer::{Course, CourseStatus};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
fn CourseCard(course: Course, on_delete: Callback<String>) -> impl IntoView {
    let id = course.id.clone();
    let status_variant = match course.status {
        CourseStatus::Published => "status-pill--primary",
        CourseStatus::Draft => "status-pill--neutral",
    };
    let assessment = if course.assessment_required { "Assessment" } else { "No Assessment" };
    let certificate = if course.certificate_available { "Certificate" } else { "No Certificate" };

    view! {
        <Card class="course-card">
            <div class="course-card__header">
                <div>
                    <div class="course-card__title-row">
                        <h3 class="course-card__title">{course.name.clone()}</h3>
                        <StatusPill variant=status_variant>{course.status.display_name()}</StatusPill>
                    </div>
                    <p class="text-muted">{course.description.clone()}</p>
                </div>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    attr:title="Delete Course"
                    class="row-actions__danger"
                    on_click=move |_| on_delete.run(id.clone())
                >
                    {icon("trash")}
                </Button>
            </div>
            <div class="course-card__facts">
                <span>{icon("book-open")}{format!("{} Modules", course.modules)}</span>
                <span>{icon("clock")}{course.duration.clone()}</span>
                <span>{icon("file-text")}{assessment}</span>
                <span>{icon("award")}{certificate}</span>
            </div>
            <div class="course-card__footer">
                {icon("users")}
                <span>{format!("{} enrolled", course.enrolled_users)}</span>
            </div>
        </Card>
    }
}

#[component]
pub fn TrainerCoursesPage() -> impl IntoView {
    let toast = use_toast();
    let courses = RwSignal::new(fixtures::courses());

    let create_open = RwSignal::new(false);
    let defaults = CourseDraft::default();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let gap = RwSignal::new(defaults.completion_gap.to_string());
    let assessment_required = RwSignal::new(defaults.assessment_required);
    let certificate_available = RwSignal::new(defaults.certificate_available);

    let create = move |_: leptos::ev::MouseEvent| {
        let Ok(completion_gap) = gap.get_untracked().trim().parse::<u32>() else {
            toast.error("Completion gap must be a whole number of days");
            return;
        };
        let draft = CourseDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            assessment_required: assessment_required.get_untracked(),
            certificate_available: certificate_available.get_untracked(),
            completion_gap,
        };
        match draft.into_course(Uuid::new_v4().to_string()) {
            Ok(course) => {
                log::info!("course {} created", course.id);
                courses.update(|cs| cs.push(course));
                name.set(String::new());
                description.set(String::new());
                create_open.set(false);
                toast.success("Course created successfully");
            }
            Err(e) => toast.error(e.message()),
        }
    };

    let on_delete = Callback::new(move |id: String| {
        if courses.try_update(|cs| remove_by_id(cs, &id, |c| c.id.as_str())).unwrap_or(false) {
            toast.success("Course deleted");
        }
    });

    view! {
        <PageFrame page_id="trainer--courses" category=PAGE_CAT_LIST>
            <PageHeader title="Course Library" subtitle="Manage your training courses and modules">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| create_open.set(true)>
                    {icon("plus")}
                    " Create Course"
                </Button>
            </PageHeader>

            <div class="card-grid">
                <For
                    each=move || courses.get()
                    key=|c| c.id.clone()
                    children=move |c: Course| view! { <CourseCard course=c on_delete=on_delete /> }
                />
            </div>

            <Dialog open=create_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Create New Course"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">"Add a new training course to your library"</p>
                            <Flex vertical=true>
                                <Label>"Course Title *"</Label>
                                <Input value=name placeholder="Enter course title" />
                                <Label>"Description"</Label>
                                <Textarea value=description placeholder="Enter course description" />
                                <Label>"Completion Gap (days)"</Label>
                                <Input value=gap input_type=InputType::Number placeholder="15" />
                                <p class="form__hint">"Days required after training completion for certificate"</p>
                                <Switch checked=assessment_required label="Assessment Required" />
                                <Switch checked=certificate_available label="Certificate Available" />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| create_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=create>
                                "Create Course"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
