use crate::shared::icons::icon;
use contracts::domain::content_hub::ContentCard;
use leptos::prelude::*;
use leptos_router::components::A;

const DEFAULT_ICON: &str = "book-open";
const DEFAULT_ACCENT: &str = "accent--content";

#[component]
pub fn ContentCardLink(card: ContentCard) -> impl IntoView {
    let icon_name = card.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string());
    let accent = card.color.clone().unwrap_or_else(|| DEFAULT_ACCENT.to_string());

    view! {
        <A href=card.path attr:class="content-card">
            <div class="content-card__top">
                <div class=format!("content-card__icon {}", accent)>{icon(&icon_name)}</div>
                <span class="content-card__chevron">{icon("chevron-right")}</span>
            </div>
            <div class="content-card__body">
                <h3 class="content-card__title">{card.title}</h3>
                <p class="content-card__description">{card.description}</p>
            </div>
            <div class="content-card__footer">
                <strong>{card.count}</strong>
                " "
                {card.count_label}
            </div>
        </A>
    }
}
