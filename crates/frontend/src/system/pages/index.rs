use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <PageFrame page_id="system--index" category=PAGE_CAT_SYSTEM class="landing">
            <div class="landing__card">
                <div class="landing__icon">{icon("graduation-cap")}</div>
                <h1 class="landing__title">"LMS Admin Panel"</h1>
                <p class="landing__text">
                    "Manage your learning content with a clean, hierarchical navigation system."
                </p>
                <div class="landing__actions">
                    <A href=routes::CONTENT_HUB attr:class="button button--primary">
                        {icon("layout-grid")}
                        <span>"Open Content Hub"</span>
                    </A>
                    <A href=routes::LOGIN attr:class="button">
                        {icon("user")}
                        <span>"Trainer / Learner Portal"</span>
                    </A>
                </div>
            </div>
        </PageFrame>
    }
}
