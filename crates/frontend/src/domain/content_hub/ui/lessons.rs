use super::components::{
    ContentBreadcrumb, ContentDataTable, ContentPreviewModal, ContentTypeLegend, EmptyPlaceholder,
    LevelHeaderBar,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BROWSE;
use crate::shared::toast::use_toast;
use super::cards_level::use_route_page;
use contracts::domain::content_hub::pages::{lessons_page, LessonsPage as LessonsModel};
use contracts::domain::content_hub::{ContentRow, PageOutcome};
use leptos::prelude::*;

/// Lesson table of one module. Deletions only touch page state.
#[component]
fn LessonsView(page: LessonsModel) -> impl IntoView {
    let toast = use_toast();
    let rows = RwSignal::new(page.rows.clone());
    let previewing = RwSignal::new(None::<ContentRow>);

    let add_label = page.header.add_label.clone();
    let on_add = Callback::new(move |_| {
        toast.info(format!("{} modal would open here", add_label));
    });
    let on_preview = Callback::new(move |row: ContentRow| previewing.set(Some(row)));
    let on_edit = Callback::new(move |row: ContentRow| {
        toast.info(format!("Edit lesson: {}", row.title));
    });
    let on_delete = Callback::new(move |row: ContentRow| {
        rows.update(|items| items.retain(|r| r.id != row.id));
        log::debug!("lesson {} removed from view", row.id);
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
            <ContentDataTable
                rows=rows
                on_preview=on_preview
                on_edit=on_edit
                on_delete=on_delete
            />
        </Show>
        <ContentTypeLegend />
        {move || previewing.get().map(|row| view! {
            <ContentPreviewModal row=row on_close=Callback::new(move |_| previewing.set(None)) />
        })}
    }
}

/// `/content-hub/modules/:module_id/lessons`
#[component]
pub fn LessonsPage() -> impl IntoView {
    let outcome = use_route_page("content_hub--lessons", "module_id", lessons_page);

    view! {
        <PageFrame page_id="content_hub--lessons" category=PAGE_CAT_BROWSE>
            {move || outcome.get().map(|outcome| match outcome {
                PageOutcome::Resolved(page) => view! { <LessonsView page=page /> }.into_any(),
                PageOutcome::NotFound(empty) => view! { <EmptyPlaceholder state=empty /> }.into_any(),
            })}
        </PageFrame>
    }
}
