use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter area with an active-filter counter and a reset action
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    #[prop(optional)] on_reset: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="filter-panel__badge">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                {on_reset.map(|reset| view! {
                    <button
                        class="filter-panel__reset"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| reset.run(())
                    >
                        "Reset"
                    </button>
                })}
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{children()}</div>
            </Show>
        </div>
    }
}
