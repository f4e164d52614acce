//! `/content-hub/explorer`: cascading filter over the hierarchy with the
//! lesson table of the selected module

use super::components::{AddContentModal, ContentDataTable, ContentPreviewModal, ContentTypeLegend};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::content_hub::{
    rows_for, ContentCatalog, ContentDraft, ContentRow, HierarchyLevel, HierarchySelection,
};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
fn LevelSelect(level: HierarchyLevel, selection: RwSignal<HierarchySelection>) -> impl IntoView {
    let catalog = ContentCatalog::global();
    let options = Memo::new(move |_| selection.with(|s| s.options(level, catalog)));
    let enabled = move || selection.with(|s| s.is_enabled(level, catalog));
    let current = move || selection.with(|s| s.get(level).map(str::to_string));

    view! {
        <div class="form__group">
            <label class="form__label">{level.label()}</label>
            <select
                class="form__select"
                disabled=move || !enabled()
                on:change=move |ev| {
                    let id = event_target_value(&ev);
                    log::debug!("explorer {} -> {:?}", level.label(), id);
                    selection.update(|s| s.select(level, &id));
                }
            >
                <option value="" selected=move || current().is_none()>{level.placeholder()}</option>
                <For
                    each=move || options.get()
                    key=|opt| opt.id.clone()
                    children=move |opt| {
                        let id = opt.id.clone();
                        view! {
                            <option
                                value=opt.id.clone()
                                selected=move || current().as_deref() == Some(id.as_str())
                            >
                                {opt.name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[component]
pub fn ContentExplorerPage() -> impl IntoView {
    let toast = use_toast();
    let catalog = ContentCatalog::global();

    let selection = RwSignal::new(HierarchySelection::default());
    let filters_open = RwSignal::new(true);
    let rows = RwSignal::new(Vec::<ContentRow>::new());
    let previewing = RwSignal::new(None::<ContentRow>);
    let adding = RwSignal::new(false);

    let module_id = Memo::new(move |_| selection.with(|s| s.module.clone()));
    let module_name = Memo::new(move |_| {
        module_id
            .get()
            .and_then(|id| catalog.module(&id).map(|m| m.name.clone()))
    });

    // Reload the table whenever the selected module changes
    Effect::new(move |_| {
        let _ = module_id.get();
        let loaded = selection.with_untracked(|s| rows_for(&s.lessons(catalog)));
        rows.set(loaded);
    });

    let active_filters = Signal::derive(move || {
        selection.with(|s| {
            HierarchyLevel::all()
                .iter()
                .filter(|l| s.get(**l).is_some())
                .count()
        })
    });

    let on_reset = Callback::new(move |_| selection.update(|s| s.reset()));
    let on_preview = Callback::new(move |row: ContentRow| previewing.set(Some(row)));
    let on_edit = Callback::new(move |row: ContentRow| {
        toast.info(format!("Edit content: {}", row.title));
    });
    let on_delete = Callback::new(move |row: ContentRow| {
        rows.update(|items| items.retain(|r| r.id != row.id));
        toast.success(format!("\"{}\" deleted", row.title));
    });
    let on_submit = Callback::new(move |draft: ContentDraft| {
        let current = rows.get_untracked();
        match draft.into_row(Uuid::new_v4().to_string(), &current) {
            Ok(row) => {
                log::info!("content {} added at position {}", row.id, row.order);
                rows.update(|items| items.push(row));
                adding.set(false);
                toast.success("Content added successfully");
            }
            Err(e) => toast.error(e.message()),
        }
    });

    let open_add = move |_: leptos::ev::MouseEvent| {
        if module_id.get_untracked().is_none() {
            toast.error("Please select a module first");
            return;
        }
        adding.set(true);
    };

    view! {
        <PageFrame page_id="content_hub--explorer" category=PAGE_CAT_LIST>
            <PageHeader
                title="Content Explorer"
                subtitle="Browse and manage lesson content across the hierarchy"
                icon_name="layers"
            >
                <Button appearance=ButtonAppearance::Primary on_click=open_add>
                    {icon("plus")}
                    " Add Content"
                </Button>
            </PageHeader>

            <div class="explorer">
                <aside class="explorer__filters">
                    <FilterPanel
                        is_expanded=filters_open
                        active_filters_count=active_filters
                        on_reset=on_reset
                    >
                        {HierarchyLevel::all()
                            .into_iter()
                            .map(|level| view! { <LevelSelect level=level selection=selection /> })
                            .collect_view()}
                    </FilterPanel>
                </aside>

                <section class="explorer__content">
                    {move || module_name.get().map(|name| view! {
                        <p class="explorer__summary">
                            {move || format!("{} items in {}", rows.with(|r| r.len()), name)}
                        </p>
                    })}
                    <Show
                        when=move || !rows.with(|r| r.is_empty())
                        fallback=|| view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">{icon("file-text")}</div>
                                <h3 class="empty-state__title">"No Content Found"</h3>
                                <p class="empty-state__description">
                                    "Select a module from the filters to view content, or add new content to get started."
                                </p>
                            </div>
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
                </section>
            </div>

            {move || previewing.get().map(|row| view! {
                <ContentPreviewModal row=row on_close=Callback::new(move |_| previewing.set(None)) />
            })}
            <Show when=move || adding.get()>
                <AddContentModal
                    target=module_name.get_untracked().unwrap_or_default()
                    on_close=Callback::new(move |_| adding.set(false))
                    on_submit=on_submit
                />
            </Show>
        </PageFrame>
    }
}
