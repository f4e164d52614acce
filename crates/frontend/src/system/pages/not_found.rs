use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    log::warn!("no route matches {}", path);

    view! {
        <PageFrame page_id="system--not_found" category=PAGE_CAT_SYSTEM class="landing">
            <div class="landing__card">
                <div class="landing__icon">{icon("alert-triangle")}</div>
                <h1 class="landing__title">"404"</h1>
                <p class="landing__text">"Oops! Page not found"</p>
                <p class="landing__path"><code>{path}</code></p>
                <A href=routes::HOME attr:class="button button--primary">
                    {icon("home")}
                    <span>"Return to Home"</span>
                </A>
            </div>
        </PageFrame>
    }
}
