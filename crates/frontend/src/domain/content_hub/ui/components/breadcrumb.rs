use crate::shared::icons::icon;
use contracts::domain::content_hub::BreadcrumbItem;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::components::A;

/// "Content Hub > B.Tech > Computer Science". The last item is plain text.
#[component]
pub fn ContentBreadcrumb(items: Vec<BreadcrumbItem>) -> impl IntoView {
    let last = items.len().saturating_sub(1);

    view! {
        <nav class="breadcrumb" aria-label="breadcrumb">
            <A href=routes::CONTENT_HUB attr:class="breadcrumb__link breadcrumb__home">
                {icon("home")}
                <span>"Content Hub"</span>
            </A>
            {items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let crumb = if i == last {
                        view! { <span class="breadcrumb__current">{item.label}</span> }.into_any()
                    } else {
                        view! { <A href=item.path attr:class="breadcrumb__link">{item.label}</A> }
                            .into_any()
                    };
                    view! {
                        <span class="breadcrumb__sep">{icon("chevron-right")}</span>
                        {crumb}
                    }
                })
                .collect_view()}
        </nav>
    }
}
