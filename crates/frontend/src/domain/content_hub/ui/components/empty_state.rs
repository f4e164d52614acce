use crate::shared::icons::icon;
use contracts::domain::content_hub::EmptyState;
use leptos::prelude::*;
use thaw::*;

/// Dashed placeholder for empty lists and unresolved ids
#[component]
pub fn EmptyPlaceholder(
    state: EmptyState,
    #[prop(optional, into)] add_label: Option<String>,
    #[prop(optional)] on_add: Option<Callback<()>>,
) -> impl IntoView {
    let action = on_add.map(|add| {
        let label = add_label.unwrap_or_else(|| "Add New".to_string());
        view! {
            <Button appearance=ButtonAppearance::Primary on_click=move |_| add.run(())>
                {icon("plus")}
                {label}
            </Button>
        }
    });

    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("folder-open")}</div>
            <h3 class="empty-state__title">{state.title}</h3>
            <p class="empty-state__description">{state.description}</p>
            {action}
        </div>
    }
}
