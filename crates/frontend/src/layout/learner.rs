use super::top_header::ProfileMenu;
use super::trainer::LogoutButton;
use super::Shell;
use crate::system::auth::guard::RequireRole;
use contracts::enums::UserRole;
use contracts::shared::navigation::{user_menu, ActiveMatch};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn LearnerLayout() -> impl IntoView {
    let profile = ProfileMenu {
        role: UserRole::User,
        account_label: "My Profile",
        account_path: "/user/profile",
        switch_to: UserRole::Trainer,
    };

    let footer: ChildrenFn = Arc::new(|| view! { <LogoutButton /> }.into_any());

    view! {
        <RequireRole role=UserRole::User>
            <Shell
                brand="LMS Learner"
                menu=user_menu()
                active_match=ActiveMatch::Exact
                marquee="Welcome to LMS Learner Portal • Continue your learning journey • Complete your pending assessments"
                profile=profile
                sidebar_footer=footer.clone()
            />
        </RequireRole>
    }
}
