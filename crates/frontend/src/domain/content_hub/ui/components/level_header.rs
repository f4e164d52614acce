use crate::shared::components::ui::CountBadge;
use crate::shared::icons::icon;
use contracts::domain::content_hub::LevelHeader;
use leptos::prelude::*;
use thaw::*;

/// Title, subtitle and child counter of a hierarchy level with the add action
#[component]
pub fn LevelHeaderBar(
    header: LevelHeader,
    /// Live counter for pages whose child list can shrink
    #[prop(optional, into)]
    count: Option<Signal<usize>>,
    #[prop(optional)] on_add: Option<Callback<()>>,
) -> impl IntoView {
    let declared = header.count;
    let count = count.unwrap_or_else(|| Signal::derive(move || declared));
    let count_label = header.count_label;

    view! {
        <div class="level-header">
            <div class="level-header__left">
                {header.show_back.then(|| view! {
                    <button
                        class="level-header__back"
                        title="Back"
                        on:click=move |_| {
                            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                                let _ = history.back();
                            }
                        }
                    >
                        {icon("arrow-left")}
                    </button>
                })}
                <div>
                    <h1 class="level-header__title">{header.title}</h1>
                    {(!header.subtitle.is_empty()).then(|| view! {
                        <p class="level-header__subtitle">{header.subtitle.clone()}</p>
                    })}
                    <p class="level-header__count">
                        <CountBadge count=count label=count_label.to_string() />
                    </p>
                </div>
            </div>
            {on_add.map(|add| view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| add.run(())>
                    {icon("plus")}
                    {header.add_label.clone()}
                </Button>
            })}
        </div>
    }
}
