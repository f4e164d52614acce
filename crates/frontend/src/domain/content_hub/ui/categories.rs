use super::cards_level::HierarchyCardsPage;
use contracts::domain::content_hub::pages::categories_page;
use leptos::prelude::*;

/// `/content-hub/:offer_id/categories`
#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <HierarchyCardsPage page_id="content_hub--categories" param="offer_id" resolve=categories_page />
    }
}
