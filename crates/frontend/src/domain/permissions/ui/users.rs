//! Per-user overrides on top of the role grants.
//!
//! Four sections: inherited (read-only), grant extras, restrict inherited,
//! and the effective summary recomputed from the overrides on every change.

use super::PermissionSwitch;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::permissions::fixtures::{demo_user, demo_user_grants};
use contracts::domain::permissions::{ModuleGrant, Permission, UserOverrides, UserProfile};
use leptos::prelude::*;
use thaw::*;

#[component]
fn UserCard(user: UserProfile) -> impl IntoView {
    let toast = use_toast();
    view! {
        <Card class="user-card">
            <div class="user-card__row">
                <div class="avatar avatar--lg">{user.initials()}</div>
                <div class="user-card__info">
                    <div class="user-card__name">
                        <h2>{user.name.clone()}</h2>
                        <StatusPill variant="status-pill--neutral">"Role-Based Access"</StatusPill>
                    </div>
                    <p class="text-muted">{user.email.clone()}</p>
                    <div class="user-card__meta">
                        <StatusPill variant="status-pill--outline">{user.role.clone()}</StatusPill>
                        <span class="text-muted">{format!("• {}", user.user_id)}</span>
                    </div>
                </div>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| toast.info("Role change is managed by the administrator")
                >
                    {icon("user")}
                    " Change Role"
                </Button>
            </div>
        </Card>
    }
}

#[component]
fn SectionCard(
    icon_name: &'static str,
    title: &'static str,
    description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class="perm-section">
            <div class="perm-section__header">
                <div class="perm-section__title">
                    {icon(icon_name)}
                    <h3>{title}</h3>
                </div>
                <p class="text-muted">{description}</p>
            </div>
            {children()}
        </Card>
    }
}

fn inherited_chips(grant: &ModuleGrant) -> impl IntoView {
    grant
        .available
        .iter()
        .map(|p| {
            let has = grant.inherited.contains(p);
            let class = if has { "perm-chip perm-chip--on" } else { "perm-chip" };
            view! {
                <span class=class>
                    {icon(if has { "check-circle" } else { "x-circle" })}
                    {p.display_name()}
                </span>
            }
        })
        .collect_view()
}

/// One switch tile in the grant or restrict section
#[component]
fn OverrideTile(
    grant: ModuleGrant,
    permission: Permission,
    overrides: RwSignal<UserOverrides>,
    restrict: bool,
) -> impl IntoView {
    let module = grant.module.clone();
    let active = Signal::derive(move || {
        overrides.with(|o| {
            if restrict {
                o.is_restricted(&module, permission)
            } else {
                o.is_granted(&module, permission)
            }
        })
    });
    let label = format!("{} {}", grant.module, permission.display_name());
    let (badge, badge_variant, tile_class) = if restrict {
        ("Restricted", "status-pill--error", "perm-tile perm-tile--danger")
    } else {
        ("Extra Access", "status-pill--success", "perm-tile")
    };

    let on_toggle = Callback::new(move |_| {
        overrides.update(|o| {
            let now = if restrict {
                o.toggle_restrict(&grant, permission)
            } else {
                o.toggle_grant(&grant, permission)
            };
            log::debug!("{} {} -> {}", grant.module, permission.code(), now);
        });
    });

    view! {
        <div class=tile_class class:perm-tile--on=move || active.get()>
            <span class="perm-tile__label">
                {permission.display_name()}
                <Show when=move || active.get()>
                    <StatusPill variant=badge_variant>{badge}</StatusPill>
                </Show>
            </span>
            <PermissionSwitch checked=active label=label on_toggle=on_toggle />
        </div>
    }
}

#[component]
pub fn UserPermissionsPage() -> impl IntoView {
    let toast = use_toast();
    let user = demo_user();
    let grants = StoredValue::new(demo_user_grants());
    let overrides = RwSignal::new(UserOverrides::default());
    let confirm_open = RwSignal::new(false);

    let user_name = user.name.clone();
    let save = move |_: leptos::ev::MouseEvent| {
        log::info!("saving permission overrides for {}", user_name);
        toast.success(format!("Permissions updated for {}", user_name));
        confirm_open.set(false);
    };
    let discard = move |_: leptos::ev::MouseEvent| {
        if overrides.with_untracked(UserOverrides::has_changes) {
            overrides.set(UserOverrides::default());
            toast.info("Changes discarded");
        }
    };

    let inherited_section = grants.with_value(|gs| {
        gs.iter()
            .map(|g| view! {
                <div class="perm-module">
                    <div class="perm-module__header">
                        <span class="perm-module__name">{g.module.clone()}</span>
                        <StatusPill variant="status-pill--neutral">"Inherited"</StatusPill>
                    </div>
                    <div class="perm-module__chips">{inherited_chips(g)}</div>
                </div>
            })
            .collect_view()
    });

    let override_section = move |restrict: bool| {
        grants.with_value(|gs| {
            gs.iter()
                .filter_map(|g| {
                    let perms = if restrict { g.inherited.clone() } else { g.grantable() };
                    if perms.is_empty() {
                        return None;
                    }
                    let tiles = perms
                        .into_iter()
                        .map(|p| view! {
                            <OverrideTile grant=g.clone() permission=p overrides=overrides restrict=restrict />
                        })
                        .collect_view();
                    Some(view! {
                        <div class="perm-module perm-module--bordered">
                            <p class="perm-module__name">{g.module.clone()}</p>
                            <div class="perm-module__grid">{tiles}</div>
                        </div>
                    })
                })
                .collect_view()
        })
    };

    let effective_summary = move || {
        let extras_of = |g: &ModuleGrant, p: Permission| overrides.with(|o| o.is_granted(&g.module, p));
        grants.with_value(|gs| {
            gs.iter()
                .filter_map(|g| {
                    let effective = overrides.with(|o| o.effective(g));
                    if effective.is_empty() {
                        return None;
                    }
                    let chips = effective
                        .into_iter()
                        .map(|p| {
                            let class = if extras_of(g, p) { "perm-chip perm-chip--extra" } else { "perm-chip" };
                            view! { <span class=class>{p.display_name()}</span> }
                        })
                        .collect_view();
                    Some(view! {
                        <div class="perm-summary">
                            <span class="perm-module__name">{g.module.clone()}</span>
                            <div class="perm-module__chips">{chips}</div>
                        </div>
                    })
                })
                .collect_view()
        })
    };

    let role_description = format!(
        "These permissions are automatically inherited from the {} role.",
        user.role
    );
    let confirm_name = user.name.clone();

    view! {
        <PageFrame page_id="permissions--users" category=PAGE_CAT_DETAIL>
            <PageHeader
                title="User Permission Override"
                subtitle="Manage individual access beyond role-based permissions"
                icon_name="user-cog"
            />

            <UserCard user=user />

            <SectionCard icon_name="shield" title="Permissions from Assigned Role" description=role_description>
                <div class="perm-section__grid">{inherited_section}</div>
            </SectionCard>

            <SectionCard
                icon_name="plus"
                title="Grant Additional Access"
                description="Provide extra permissions beyond the assigned role.".to_string()
            >
                {override_section(false)}
            </SectionCard>

            <SectionCard
                icon_name="lock"
                title="Restrict Role-Based Access"
                description="Disable specific permissions inherited from the role.".to_string()
            >
                {override_section(true)}
            </SectionCard>

            <SectionCard
                icon_name="eye"
                title="Effective Permissions Summary"
                description="Final computed permissions for this user after all overrides.".to_string()
            >
                <div class="perm-section__grid">{effective_summary}</div>
            </SectionCard>

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
                            "Are you sure you want to update access permissions for "
                            <strong>{confirm_name}</strong>
                            "?"
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
        </PageFrame>
    }
}
