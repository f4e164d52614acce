use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use contracts::domain::content_hub::ContentRow;
use contracts::enums::{ContentSource, ContentType};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TypeBadge(content_type: ContentType) -> impl IntoView {
    view! {
        <span class=format!("type-badge {}", content_type.badge_class())>
            {icon(content_type.icon_name())}
            {content_type.display_name()}
        </span>
    }
}

#[component]
fn SourceLabel(source: ContentSource) -> impl IntoView {
    let icon_name = match source {
        ContentSource::Upload => "upload",
        ContentSource::External => "link",
    };
    view! {
        <span class="source-label">
            {icon(icon_name)}
            {source.display_name()}
        </span>
    }
}

/// Lesson rows with Preview / Edit / Delete actions
#[component]
pub fn ContentDataTable(
    #[prop(into)] rows: Signal<Vec<ContentRow>>,
    on_preview: Callback<ContentRow>,
    on_edit: Callback<ContentRow>,
    on_delete: Callback<ContentRow>,
) -> impl IntoView {
    view! {
        <div class="content-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=60.0>"Order"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Content Title"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Content Type"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Source"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Duration"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |row: ContentRow| {
                            let for_preview = row.clone();
                            let for_edit = row.clone();
                            let for_delete = row.clone();
                            let status = row.status;
                            let duration = row.duration.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <span class="content-table__order">{row.order}</span>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>{row.title.clone()}</strong>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TypeBadge content_type=row.content_type />
                                    </TableCell>
                                    <TableCell>
                                        <SourceLabel source=row.source />
                                    </TableCell>
                                    <TableCell>
                                        {match duration {
                                            Some(d) => view! {
                                                <span class="content-table__duration">{icon("clock")}{d}</span>
                                            }.into_any(),
                                            None => view! { <span class="muted">"—"</span> }.into_any(),
                                        }}
                                    </TableCell>
                                    <TableCell>
                                        <StatusPill variant=format!("status-pill--{}", status.badge_variant())>
                                            {status.display_name()}
                                        </StatusPill>
                                    </TableCell>
                                    <TableCell>
                                        <div class="row-actions">
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                attr:title="Preview"
                                                on_click=move |_| on_preview.run(for_preview.clone())
                                            >
                                                {icon("eye")}
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                attr:title="Edit"
                                                on_click=move |_| on_edit.run(for_edit.clone())
                                            >
                                                {icon("pencil")}
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                attr:title="Delete"
                                                class="row-actions__danger"
                                                on_click=move |_| on_delete.run(for_delete.clone())
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn ContentTypeLegend() -> impl IntoView {
    view! {
        <div class="type-legend">
            <h3 class="type-legend__title">"Supported Content Types"</h3>
            <div class="type-legend__items">
                {ContentType::all()
                    .into_iter()
                    .map(|kind| view! {
                        <span class="type-legend__item">
                            <span class=format!("type-legend__dot {}", kind.badge_class())></span>
                            {kind.legend_label()}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
