use crate::shared::icons::icon;
use contracts::domain::content_hub::ModuleRow;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Modules of a sub-category with Edit / Delete actions; titles open the
/// module's lessons
#[component]
pub fn ModuleTable(
    #[prop(into)] rows: Signal<Vec<ModuleRow>>,
    on_edit: Callback<ModuleRow>,
    on_delete: Callback<ModuleRow>,
) -> impl IntoView {
    view! {
        <div class="content-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=260.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Lessons"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |row: ModuleRow| {
                            let for_edit = row.clone();
                            let for_delete = row.clone();
                            let lessons_label = row.lessons_label();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <span class="content-table__order">{row.order}</span>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <A href=routes::module_lessons(&row.id) attr:class="content-table__link">
                                                <strong>{row.title.clone()}</strong>
                                            </A>
                                            <p class="text-muted">{row.description.clone()}</p>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <span class="text-muted">{lessons_label}</span>
                                    </TableCell>
                                    <TableCell>
                                        <div class="row-actions">
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
