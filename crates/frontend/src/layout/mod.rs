pub mod admin;
pub mod error_boundary;
pub mod global_context;
pub mod learner;
pub mod left;
pub mod top_header;
pub mod trainer;

use contracts::shared::navigation::{ActiveMatch, NavEntry};
use error_boundary::RouteErrorBoundary;
use global_context::AppGlobalContext;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use left::sidebar::Sidebar;
use top_header::{ProfileMenu, TopHeader};

/// Application shell shared by the admin and portal layouts.
///
/// ```text
/// +-----------+------------------------------+
/// |           |  TopHeader                   |
/// |  Sidebar  +------------------------------+
/// |           |  routed page (Outlet)        |
/// +-----------+------------------------------+
/// ```
///
/// The outlet sits inside a `RouteErrorBoundary`, so a failing page keeps
/// the navigation usable.
#[component]
pub fn Shell(
    brand: &'static str,
    menu: Vec<NavEntry>,
    active_match: ActiveMatch,
    marquee: &'static str,
    #[prop(optional)] profile: Option<ProfileMenu>,
    #[prop(optional)] sidebar_footer: Option<ChildrenFn>,
) -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    view! {
        <div class="app-layout" class:app-layout--collapsed=move || ctx.sidebar_collapsed.get()>
            {match sidebar_footer {
                Some(footer) => view! {
                    <Sidebar brand=brand entries=menu active_match=active_match footer=footer />
                }.into_any(),
                None => view! {
                    <Sidebar brand=brand entries=menu active_match=active_match />
                }.into_any(),
            }}
            <div class="app-main">
                {match profile {
                    Some(p) => view! { <TopHeader marquee=marquee profile=p /> }.into_any(),
                    None => view! { <TopHeader marquee=marquee /> }.into_any(),
                }}
                <main class="app-content">
                    <RouteErrorBoundary>
                        <Outlet />
                    </RouteErrorBoundary>
                </main>
            </div>
        </div>
    }
}
