use super::cards_level::HierarchyCardsPage;
use contracts::domain::content_hub::pages::sub_categories_page;
use leptos::prelude::*;

/// `/content-hub/categories/:category_id/sub-categories`
#[component]
pub fn SubCategoriesPage() -> impl IntoView {
    view! {
        <HierarchyCardsPage
            page_id="content_hub--sub_categories"
            param="category_id"
            resolve=sub_categories_page
        />
    }
}
