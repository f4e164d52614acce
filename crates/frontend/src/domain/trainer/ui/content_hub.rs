use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::remove_by_id;
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::forms::UploadDraft;
use contracts::domain::trainer::{RepositoryItem, RepositoryKind};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

fn kind_option_label(kind: RepositoryKind) -> &'static str {
    match kind {
        RepositoryKind::Video => "Video",
        RepositoryKind::Pdf => "PDF Document",
        RepositoryKind::Xr => "XR/VR Content",
        RepositoryKind::Scorm => "SCORM Package",
    }
}

#[component]
fn RepositoryCard(item: RepositoryItem, on_delete: Callback<String>) -> impl IntoView {
    let id = item.id.clone();
    let icon_class = format!("repo-card__icon repo-card__icon--{}", item.kind.code());
    let (resume_label, resume_variant) = if item.resume_enabled {
        ("Enabled", "status-pill--primary")
    } else {
        ("Disabled", "status-pill--neutral")
    };
    let assigned = if item.assigned_courses.is_empty() {
        "Not assigned".to_string()
    } else {
        item.assigned_courses.join(", ")
    };

    view! {
        <Card class="repo-card">
            <div class="repo-card__header">
                <div class="repo-card__identity">
                    <span class=icon_class>{icon(item.kind.icon_name())}</span>
                    <div>
                        <h3>{item.name.clone()}</h3>
                        <StatusPill variant="status-pill--outline">{item.kind.display_name()}</StatusPill>
                    </div>
                </div>
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
            <dl class="repo-card__facts">
                <dt>{icon("clock")}" Duration"</dt>
                <dd>{item.duration.clone()}</dd>
                <dt>"Size"</dt>
                <dd>{item.size.clone()}</dd>
                <dt>"Resume"</dt>
                <dd><StatusPill variant=resume_variant>{resume_label}</StatusPill></dd>
            </dl>
            <p class="repo-card__courses text-muted">{assigned}</p>
        </Card>
    }
}

#[component]
pub fn TrainerContentHubPage() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(fixtures::repository());

    let defaults = UploadDraft::default();
    let upload_open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(defaults.kind.code().to_string());
    let resume_enabled = RwSignal::new(defaults.resume_enabled);

    let upload = move |_: leptos::ev::MouseEvent| {
        let draft = UploadDraft {
            name: name.get_untracked(),
            kind: RepositoryKind::from_code(&kind.get_untracked()).unwrap_or(RepositoryKind::Video),
            resume_enabled: resume_enabled.get_untracked(),
        };
        match draft.into_item(Uuid::new_v4().to_string()) {
            Ok(item) => {
                log::info!("repository item {} uploaded as {}", item.id, item.kind.code());
                items.update(|list| list.push(item));
                name.set(String::new());
                upload_open.set(false);
                toast.success("Content uploaded successfully");
            }
            Err(e) => toast.error(e.message()),
        }
    };

    let on_delete = Callback::new(move |id: String| {
        if items.try_update(|list| remove_by_id(list, &id, |i| i.id.as_str())).unwrap_or(false) {
            toast.success("Content deleted");
        }
    });

    view! {
        <PageFrame page_id="trainer--content-hub" category=PAGE_CAT_LIST>
            <PageHeader title="Content Hub" subtitle="Central repository for all training content">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| upload_open.set(true)>
                    {icon("upload")}
                    " Upload Content"
                </Button>
            </PageHeader>

            <div class="card-grid">
                <For
                    each=move || items.get()
                    key=|i| i.id.clone()
                    children=move |i: RepositoryItem| view! { <RepositoryCard item=i on_delete=on_delete /> }
                />
            </div>

            <Dialog open=upload_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Upload New Content"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">"Add new training content to the repository"</p>
                            <Flex vertical=true>
                                <Label>"Content Title *"</Label>
                                <Input value=name placeholder="Enter content title" />
                                <Label>"Content Type"</Label>
                                <Select value=kind>
                                    {RepositoryKind::all()
                                        .into_iter()
                                        .map(|k| view! { <option value=k.code()>{kind_option_label(k)}</option> })
                                        .collect_view()}
                                </Select>
                                <Label>"File Upload"</Label>
                                <div class="dropzone">
                                    {icon("upload")}
                                    <p>"Drag and drop or click to upload"</p>
                                </div>
                                <Switch checked=resume_enabled label="Resume Enabled" />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| upload_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=upload>
                                "Upload"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
