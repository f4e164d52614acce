use super::Shell;
use contracts::shared::navigation::{admin_menu, ActiveMatch};
use leptos::prelude::*;

/// Admin chrome around the content hub, certificate templates and permissions
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <Shell
            brand="LMS Admin"
            menu=admin_menu()
            active_match=ActiveMatch::Prefix
            marquee="Welcome to Learning Management System • Empowering education through technology • Build, manage and deliver impactful learning experiences • Create certificates, assessments, and engaging content"
        />
    }
}
