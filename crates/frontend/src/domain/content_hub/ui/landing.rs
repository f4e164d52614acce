use super::cards_level::CardsView;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BROWSE;
use contracts::domain::content_hub::{pages::landing_page, ContentCatalog};
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ContentHubPage() -> impl IntoView {
    let page = landing_page(ContentCatalog::global());

    view! {
        <PageFrame page_id="content_hub--landing" category=PAGE_CAT_BROWSE>
            <CardsView page=page />
            <div class="content-hub__explorer-link">
                <A href=routes::CONTENT_EXPLORER attr:class="button">
                    {icon("search")}
                    <span>"Open Content Explorer"</span>
                </A>
            </div>
        </PageFrame>
    }
}
