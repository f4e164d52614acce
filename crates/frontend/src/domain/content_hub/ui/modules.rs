use super::cards_level::use_route_page;
use super::components::{
    ContentBreadcrumb, ContentCardLink, EmptyPlaceholder, LevelHeaderBar, ModuleTable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BROWSE;
use crate::shared::toast::use_toast;
use contracts::domain::content_hub::pages::modules_page;
use contracts::domain::content_hub::{ContentCard, ModuleRow, ModulesPage as ModulesModel, PageOutcome};
use leptos::prelude::*;

/// Module table above the navigation cards. Deletions only touch page state.
#[component]
fn ModulesView(page: ModulesModel) -> impl IntoView {
    let toast = use_toast();
    let rows = RwSignal::new(page.rows.clone());
    let cards = RwSignal::new(page.cards.clone());

    let add_label = page.header.add_label.clone();
    let on_add = Callback::new(move |_| {
        toast.info(format!("{} modal would open here", add_label));
    });
    let on_edit = Callback::new(move |row: ModuleRow| {
        toast.info(format!("Edit module: {}", row.title));
    });
    let on_delete = Callback::new(move |row: ModuleRow| {
        rows.update(|items| items.retain(|r| r.id != row.id));
        cards.update(|items| items.retain(|c| c.id != row.id));
        log::debug!("module {} removed from view", row.id);
        toast.success(format!("\"{}\" deleted", row.title));
    });

    let count = Signal::derive(move || rows.with(|r| r.len()));
    let empty = page.empty.clone();
    let empty_add_label = page.header.add_label.clone();

    view! {
        <ContentBreadcrumb items=page.breadcrumbs.clone() />
        <LevelHeaderBar header=page.header count=count on_add=on_add />
        <Show
            when=move || { count.get() > 0 }
            fallback=move || view! {
                <EmptyPlaceholder state=empty.clone() add_label=empty_add_label.clone() on_add=on_add />
            }
        >
            <ModuleTable rows=rows on_edit=on_edit on_delete=on_delete />
            <p class="text-muted">"Open a module title to manage its lessons"</p>
            <div class="card-grid card-grid--2">
                <For
                    each=move || cards.get()
                    key=|card| card.id.clone()
                    children=|card: ContentCard| view! { <ContentCardLink card=card /> }
                />
            </div>
        </Show>
    }
}

/// `/content-hub/sub-categories/:sub_category_id/modules`
#[component]
pub fn ModulesPage() -> impl IntoView {
    let outcome = use_route_page("content_hub--modules", "sub_category_id", modules_page);

    view! {
        <PageFrame page_id="content_hub--modules" category=PAGE_CAT_BROWSE>
            {move || outcome.get().map(|outcome| match outcome {
                PageOutcome::Resolved(page) => view! { <ModulesView page=page /> }.into_any(),
                PageOutcome::NotFound(empty) => view! { <EmptyPlaceholder state=empty /> }.into_any(),
            })}
        </PageFrame>
    }
}
