use super::top_header::ProfileMenu;
use super::Shell;
use crate::shared::icons::icon;
use crate::system::auth::context::use_role;
use crate::system::auth::guard::RequireRole;
use contracts::enums::UserRole;
use contracts::shared::navigation::{trainer_menu, ActiveMatch};
use contracts::shared::routes;
use leptos::prelude::*;
use std::sync::Arc;
use leptos_router::hooks::use_navigate;

/// Logout button at the bottom of a portal sidebar
#[component]
pub fn LogoutButton() -> impl IntoView {
    let role = use_role();
    let navigate = use_navigate();

    view! {
        <button
            class="app-sidebar__item app-sidebar__logout"
            on:click=move |_| {
                role.logout();
                navigate(routes::LOGIN, Default::default());
            }
        >
            {icon("log-out")}
            <span>"Logout"</span>
        </button>
    }
}

#[component]
pub fn TrainerLayout() -> impl IntoView {
    let profile = ProfileMenu {
        role: UserRole::Trainer,
        account_label: "Settings",
        account_path: "/trainer/settings",
        switch_to: UserRole::User,
    };

    let footer: ChildrenFn = Arc::new(|| view! { <LogoutButton /> }.into_any());

    view! {
        <RequireRole role=UserRole::Trainer>
            <Shell
                brand="LMS Trainer"
                menu=trainer_menu()
                active_match=ActiveMatch::Exact
                marquee="Welcome to LMS Trainer Portal • New courses available • Check your pending assessments"
                profile=profile
                sidebar_footer=footer.clone()
            />
        </RequireRole>
    }
}
