use contracts::enums::UserRole;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_role;

/// Renders `children` only for the given role, otherwise sends the visitor
/// to the sign-in page
#[component]
pub fn RequireRole(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let ctx = use_role();

    view! {
        <Show
            when=move || ctx.role() == Some(role)
            fallback=move || {
                log::warn!("{} area requested without a {} session", role.display_name(), role.code());
                view! { <Redirect path=routes::LOGIN /> }
            }
        >
            {children()}
        </Show>
    }
}
