//! Top bar of every layout: sidebar toggle, scrolling announcement and,
//! inside the portals, notifications and the profile menu.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_role;
use contracts::enums::UserRole;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Profile menu of a portal layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileMenu {
    pub role: UserRole,
    /// Label and path of the first menu entry
    pub account_label: &'static str,
    pub account_path: &'static str,
    /// Role offered by the "Switch to ... View" entry
    pub switch_to: UserRole,
}

#[component]
pub fn TopHeader(
    marquee: &'static str,
    #[prop(optional)] profile: Option<ProfileMenu>,
) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <header class="top-header">
            <button class="top-header__icon-btn" title="Toggle navigation" on:click=move |_| ctx.toggle_sidebar()>
                {icon("menu")}
            </button>
            <div class="top-header__marquee">
                <p class="top-header__marquee-text">{marquee}</p>
            </div>
            {profile.map(|p| view! { <PortalActions profile=p /> })}
        </header>
    }
}

#[component]
fn PortalActions(profile: ProfileMenu) -> impl IntoView {
    let ctx = use_global_context();
    let role = use_role();
    let toast = use_toast();
    let navigate = use_navigate();

    let go = {
        let navigate = navigate.clone();
        move |path: &str| {
            ctx.close_profile_menu();
            navigate(path, Default::default());
        }
    };
    let open_account = {
        let go = go.clone();
        move |_| go(profile.account_path)
    };
    let switch_role = {
        let go = go.clone();
        move |_| {
            role.set_role(Some(profile.switch_to));
            go(profile.switch_to.home_path());
        }
    };
    let logout = move |_| {
        role.logout();
        toast.info("Logged out");
        go(routes::LOGIN);
    };

    view! {
        <div class="top-header__actions">
            <button class="top-header__icon-btn top-header__notifications" title="Notifications">
                {icon("bell")}
                <span class="top-header__notification-count">"3"</span>
            </button>

            <div class="profile-menu">
                <button class="profile-menu__trigger" on:click=move |_| ctx.toggle_profile_menu()>
                    <span class="avatar">{move || role.initials()}</span>
                    <span class="profile-menu__who">
                        <span class="profile-menu__name">{move || role.user_name()}</span>
                        <span class="profile-menu__role">{profile.role.display_name()}</span>
                    </span>
                </button>
                <Show when=move || ctx.profile_menu_open.get()>
                    <div class="profile-menu__dropdown">
                        <button class="profile-menu__item" on:click=open_account.clone()>
                            {icon("settings")}
                            {profile.account_label}
                        </button>
                        <button class="profile-menu__item" on:click=switch_role.clone()>
                            {icon("users")}
                            {format!("Switch to {} View", profile.switch_to.display_name())}
                        </button>
                        <div class="profile-menu__separator"></div>
                        <button class="profile-menu__item profile-menu__item--danger" on:click=logout.clone()>
                            {icon("log-out")}
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
