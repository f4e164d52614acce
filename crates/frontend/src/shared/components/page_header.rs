use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of a page: heading, optional subtitle and icon, actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] icon_name: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon_name.map(|name| view! { <div class="page__header-icon">{icon(name)}</div> })}
                <div class="page__header-text">
                    <h1 class="page__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! { <p class="page__subtitle">{s}</p> })}
                </div>
            </div>
            <div class="page__header-actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
