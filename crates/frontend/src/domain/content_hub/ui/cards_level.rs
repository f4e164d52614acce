//! Shared body of the card-grid levels (offer types down to modules)

use super::components::{ContentBreadcrumb, ContentCardLink, EmptyPlaceholder, LevelHeaderBar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BROWSE;
use crate::shared::toast::use_toast;
use contracts::domain::content_hub::{route_id, CardsPage, ContentCatalog, PageOutcome};
use contracts::shared::error::AppError;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

pub type CardsResolver = fn(&ContentCatalog, &str) -> PageOutcome<CardsPage>;

/// Resolves the `param` route segment with `resolve`. Unknown ids are
/// logged and become `NotFound`; a blank segment is an error for the
/// route boundary.
pub fn use_route_page<T>(
    page_id: &'static str,
    param: &'static str,
    resolve: fn(&ContentCatalog, &str) -> PageOutcome<T>,
) -> Memo<Result<PageOutcome<T>, AppError>>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let params = use_params_map();
    Memo::new(move |_| {
        let id = route_id(params.read().get(param))?;
        let outcome = resolve(ContentCatalog::global(), &id);
        if outcome.is_not_found() {
            log::warn!("{}: no record for {}={}", page_id, param, id);
        }
        Ok(outcome)
    })
}

#[component]
pub fn CardsView(page: CardsPage) -> impl IntoView {
    let toast = use_toast();
    let add_label = page.header.add_label.clone();
    let on_add = Callback::new(move |_| {
        toast.info(format!("{} modal would open here", add_label));
    });
    let empty_add_label = page.header.add_label.clone();

    view! {
        {(!page.breadcrumbs.is_empty()).then(|| view! {
            <ContentBreadcrumb items=page.breadcrumbs.clone() />
        })}
        <LevelHeaderBar header=page.header on_add=on_add />
        {if page.cards.is_empty() {
            view! {
                <EmptyPlaceholder state=page.empty add_label=empty_add_label on_add=on_add />
            }
            .into_any()
        } else {
            view! {
                <div class="card-grid">
                    {page.cards
                        .into_iter()
                        .map(|card| view! { <ContentCardLink card=card /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

/// Card grid of one level, or the not-found placeholder
#[component]
pub fn HierarchyCardsPage(
    page_id: &'static str,
    param: &'static str,
    resolve: CardsResolver,
) -> impl IntoView {
    let outcome = use_route_page(page_id, param, resolve);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_BROWSE>
            {move || outcome.get().map(|outcome| match outcome {
                PageOutcome::Resolved(page) => view! { <CardsView page=page /> }.into_any(),
                PageOutcome::NotFound(empty) => view! { <EmptyPlaceholder state=empty /> }.into_any(),
            })}
        </PageFrame>
    }
}
