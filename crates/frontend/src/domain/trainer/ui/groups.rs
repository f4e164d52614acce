use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::remove_by_id;
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::forms::GroupDraft;
use contracts::domain::trainer::{ActiveStatus, TrainingGroup};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
fn GroupCard(group: TrainingGroup, on_delete: Callback<String>) -> impl IntoView {
    let toast = use_toast();
    let id = group.id.clone();
    let name = group.name.clone();
    let variant = if group.status == ActiveStatus::Active {
        "status-pill--primary"
    } else {
        "status-pill--neutral"
    };

    view! {
        <Card class="group-card">
            <div class="group-card__header">
                <div>
                    <h3 class="group-card__title">{group.name.clone()}</h3>
                    <p class="text-muted">{group.description.clone()}</p>
                </div>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    attr:title="Delete Group"
                    class="row-actions__danger"
                    on_click=move |_| on_delete.run(id.clone())
                >
                    {icon("trash")}
                </Button>
            </div>
            <div class="group-card__stats">
                <div class="mini-stat">
                    {icon("users")}
                    <strong>{group.total_users}</strong>
                    <span>"Users"</span>
                </div>
                <div class="mini-stat">
                    {icon("book-open")}
                    <strong>{group.courses_assigned}</strong>
                    <span>"Courses"</span>
                </div>
                <div class="mini-stat">
                    {icon("trending-up")}
                    <strong>{format!("{}%", group.completion)}</strong>
                    <span>"Complete"</span>
                </div>
            </div>
            <div class="group-card__footer">
                <StatusPill variant=variant>{group.status.display_name()}</StatusPill>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| toast.info(format!("Managing {}", name))
                >
                    "Manage"
                </Button>
            </div>
        </Card>
    }
}

#[component]
pub fn TrainerGroupsPage() -> impl IntoView {
    let toast = use_toast();
    let groups = RwSignal::new(fixtures::groups());

    let create_open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let active = RwSignal::new(true);

    let reset_form = move || {
        name.set(String::new());
        description.set(String::new());
        active.set(true);
    };

    let create = move |_: leptos::ev::MouseEvent| {
        let draft = GroupDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            active: active.get_untracked(),
        };
        match draft.into_group(Uuid::new_v4().to_string()) {
            Ok(group) => {
                log::info!("group {} created", group.id);
                groups.update(|gs| gs.push(group));
                reset_form();
                create_open.set(false);
                toast.success("Group created successfully");
            }
            Err(e) => toast.error(e.message()),
        }
    };

    let on_delete = Callback::new(move |id: String| {
        if groups.try_update(|gs| remove_by_id(gs, &id, |g| g.id.as_str())).unwrap_or(false) {
            toast.success("Group deleted");
        }
    });

    view! {
        <PageFrame page_id="trainer--groups" category=PAGE_CAT_LIST>
            <PageHeader title="My Groups" subtitle="Manage training groups and their assignments">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| create_open.set(true)>
                    {icon("plus")}
                    " Create Group"
                </Button>
            </PageHeader>

            <div class="card-grid">
                <For
                    each=move || groups.get()
                    key=|g| g.id.clone()
                    children=move |g: TrainingGroup| view! { <GroupCard group=g on_delete=on_delete /> }
                />
            </div>

            <Dialog open=create_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Create New Group"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">"Add a new training group to organize your learners"</p>
                            <Flex vertical=true>
                                <Label>"Group Name *"</Label>
                                <Input value=name placeholder="Enter group name" />
                                <Label>"Description"</Label>
                                <Textarea value=description placeholder="Enter group description" />
                                <Switch checked=active label="Active Status" />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| create_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=create>
                                "Create Group"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
