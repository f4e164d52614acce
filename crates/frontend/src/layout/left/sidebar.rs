//! Sidebar navigation built from a `NavEntry` menu

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::navigation::{group_nav_entries, ActiveMatch, NavEntry};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar(
    brand: &'static str,
    entries: Vec<NavEntry>,
    active_match: ActiveMatch,
    /// Pinned to the bottom, e.g. the logout button
    #[prop(optional)]
    footer: Option<ChildrenFn>,
) -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();
    let collapsed = move || ctx.sidebar_collapsed.get();
    let groups = group_nav_entries(&entries);

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=collapsed>
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("graduation-cap")}</div>
                <Show when=move || !collapsed()>
                    <span class="app-sidebar__brand-name">{brand}</span>
                </Show>
                <button class="app-sidebar__toggle" on:click=move |_| ctx.toggle_sidebar()>
                    {move || if collapsed() { icon("chevron-right") } else { icon("chevron-left") }}
                </button>
            </div>

            <nav class="app-sidebar__content">
                {groups.into_iter().map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            {group.section.map(|label| view! {
                                <Show when=move || !collapsed()>
                                    <div class="app-sidebar__section">{label}</div>
                                </Show>
                            })}
                            {group.items.into_iter().map(|item| {
                                let (path, label, icon_name) = (item.path, item.label, item.icon);
                                let is_active = move || {
                                    location.pathname.with(|current| active_match.is_active(path, current))
                                };
                                view! {
                                    <A href=path attr:title=label>
                                        <div class="app-sidebar__item" class:app-sidebar__item--active=is_active>
                                            {icon(icon_name)}
                                            <Show when=move || !collapsed()>
                                                <span>{label}</span>
                                            </Show>
                                        </div>
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    }
                }).collect_view()}
            </nav>

            {footer.map(|f| view! { <div class="app-sidebar__footer">{f()}</div> })}
        </aside>
    }
}
