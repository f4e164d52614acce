use super::PermissionSwitch;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::permissions::{
    AccessLevel, Permission, PermissionModule, RoleDirectory, RolePermissionMatrix,
};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// "trainer" -> "Trainer"
fn role_title(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn access_variant(level: AccessLevel) -> &'static str {
    match level {
        AccessLevel::Full => "status-pill--success",
        AccessLevel::Partial => "status-pill--info",
        AccessLevel::None => "status-pill--neutral",
    }
}

#[component]
fn ModuleAccessRow(
    module: &'static PermissionModule,
    matrix: RwSignal<RolePermissionMatrix>,
    open_modules: RwSignal<HashSet<&'static str>>,
) -> impl IntoView {
    let id = module.id;
    let is_open = Memo::new(move |_| open_modules.with(|open| open.contains(id)));
    let badge = Memo::new(move |_| matrix.with(|m| (m.count_label(module), m.access_level(module))));

    let toggle_open = move |_| {
        open_modules.update(|open| {
            if !open.remove(id) {
                open.insert(id);
            }
        })
    };

    view! {
        <div class="module-access" class:module-access--open=move || is_open.get()>
            <button class="module-access__trigger" on:click=toggle_open>
                <div class="module-access__info">
                    <span class="module-access__icon">{icon(module.icon)}</span>
                    <div>
                        <div class="module-access__name">{module.name}</div>
                        <div class="module-access__description">{module.description}</div>
                    </div>
                </div>
                <div class="module-access__meta">
                    <StatusPill variant=Signal::derive(move || access_variant(badge.get().1).to_string())>
                        {move || badge.get().0}
                    </StatusPill>
                    <span class="module-access__chevron">{icon("chevron-down")}</span>
                </div>
            </button>
            <Show when=move || is_open.get()>
                <div class="module-access__grid">
                    {module
                        .permissions
                        .iter()
                        .copied()
                        .map(|perm: Permission| {
                            let enabled = Signal::derive(move || matrix.with(|m| m.is_enabled(id, perm)));
                            view! {
                                <div class="perm-tile" class:perm-tile--on=move || enabled.get()>
                                    <span class="perm-tile__label" title=perm.description()>
                                        {perm.display_name()}
                                        <span class="perm-tile__info">{icon("info")}</span>
                                    </span>
                                    <PermissionSwitch
                                        checked=enabled
                                        label=format!("{} {}", module.name, perm.display_name())
                                        on_toggle=Callback::new(move |_| {
                                            matrix.update(|m| {
                                                m.toggle(id, perm);
                                            });
                                        })
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn RolePermissionsPage() -> impl IntoView {
    let toast = use_toast();

    let directory = RwSignal::new(RoleDirectory::default());
    let selected_role = RwSignal::new("trainer".to_string());
    let matrix = RwSignal::new(RolePermissionMatrix::defaults("trainer"));
    let open_modules = RwSignal::new(HashSet::<&'static str>::new());

    let confirm_open = RwSignal::new(false);
    let create_open = RwSignal::new(false);
    let new_role_name = RwSignal::new(String::new());

    // Switching roles reloads that role's built-in grants
    Effect::new(move |_| {
        let role = selected_role.get();
        if matrix.with_untracked(|m| m.role != role) {
            log::debug!("loading permission matrix for role {}", role);
            matrix.set(RolePermissionMatrix::defaults(&role));
        }
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let role = selected_role.get_untracked();
        log::info!("saving permissions for role {}", role);
        toast.success(format!("Permissions updated for {} role", role));
        confirm_open.set(false);
    };

    let discard = move |_: leptos::ev::MouseEvent| {
        let role = selected_role.get_untracked();
        matrix.set(RolePermissionMatrix::defaults(&role));
        toast.info("Changes discarded");
    };

    let create_role = move |_: leptos::ev::MouseEvent| {
        let name = new_role_name.get_untracked();
        match directory.try_update(|d| d.create_role(&name)) {
            Some(Ok(key)) => {
                log::info!("role {} created", key);
                toast.success(format!("Role \"{}\" created successfully", name.trim()));
                selected_role.set(key);
                new_role_name.set(String::new());
                create_open.set(false);
            }
            Some(Err(e)) => toast.error(e.message()),
            None => {}
        }
    };

    view! {
        <PageFrame page_id="permissions--roles" category=PAGE_CAT_DETAIL>
            <PageHeader
                title="Role Permission Management"
                subtitle="Control what each role can access in the system"
                icon_name="shield"
            >
                <Select value=selected_role>
                    {move || {
                        directory
                            .with(|d| d.roles().to_vec())
                            .into_iter()
                            .map(|role| {
                                let title = role_title(&role);
                                view! { <option value=role>{title}</option> }
                            })
                            .collect_view()
                    }}
                </Select>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| create_open.set(true)>
                    {icon("plus")}
                    " Create Role"
                </Button>
            </PageHeader>

            <Card class="module-access-card">
                <div class="module-access-card__header">
                    <h3>"Module Access Control"</h3>
                    <p class="text-muted">"Configure permissions for each module in the system"</p>
                </div>
                {RolePermissionMatrix::modules()
                    .iter()
                    .map(|module| view! {
                        <ModuleAccessRow module=module matrix=matrix open_modules=open_modules />
                    })
                    .collect_view()}
            </Card>

            <div class="sticky-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=discard>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| confirm_open.set(true)>
                    "Save Changes"
                </Button>
            </div>

            <Dialog open=confirm_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Confirm Permission Update"</DialogTitle>
                        <DialogContent>
                            "Are you sure you want to update permissions for the "
                            <strong>{move || role_title(&selected_role.get())}</strong>
                            " role? This will affect all users with this role."
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| confirm_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=save>
                                "Confirm Update"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <Dialog open=create_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Create New Role"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">
                                "Enter a name for the new role. You can configure permissions after creation."
                            </p>
                            <Flex vertical=true>
                                <Label>"Role Name"</Label>
                                <Input value=new_role_name placeholder="e.g. Manager, Supervisor..." />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| create_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || new_role_name.with(|n| n.trim().is_empty()))
                                on_click=create_role
                            >
                                "Create Role"
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
    fn role_titles_are_capitalised() {
        assert_eq!(role_title("trainer"), "Trainer");
        assert_eq!(role_title("quality lead"), "Quality lead");
        assert_eq!(role_title(""), "");
    }

    #[test]
    fn access_levels_map_to_pill_variants() {
        assert_eq!(access_variant(AccessLevel::Full), "status-pill--success");
        assert_eq!(access_variant(AccessLevel::None), "status-pill--neutral");
    }
}
