use super::preview_modal::CertificatePreviewModal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::certificates::{CertificateTemplate, CertificateTemplateList, LinkedType};
use contracts::shared::date_format::display_date;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

fn linked_type_variant(kind: LinkedType) -> &'static str {
    match kind {
        LinkedType::Course => "status-pill--info",
        LinkedType::Assessment => "status-pill--purple",
    }
}

#[component]
pub fn CertificateTemplatesPage() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    // Page-local; a remount starts from the fixtures again
    let list = RwSignal::new(CertificateTemplateList::from_fixtures());
    let previewing = RwSignal::new(None::<CertificateTemplate>);
    let pending_delete = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);

    let go = StoredValue::new(navigate);
    let open_create = move |_: leptos::ev::MouseEvent| {
        go.with_value(|nav| nav(routes::CERTIFICATE_TEMPLATE_CREATE, Default::default()));
    };
    let open_edit = move |id: String| {
        go.with_value(|nav| nav(&routes::certificate_template_edit(&id), Default::default()));
    };
    let ask_delete = move |id: String| {
        pending_delete.set(Some(id));
        confirm_open.set(true);
    };
    let confirm_delete = move |_: leptos::ev::MouseEvent| {
        if let Some(id) = pending_delete.get_untracked() {
            let removed = list.try_update(|l| l.delete(&id)).flatten();
            match removed {
                Some(t) => {
                    log::info!("certificate template {} removed from list", t.id);
                    toast.success("Certificate template deleted successfully");
                }
                None => log::warn!("certificate template {} already gone", id),
            }
        }
        pending_delete.set(None);
        confirm_open.set(false);
    };

    view! {
        <PageFrame page_id="certificates--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Certificate Templates"
                subtitle="Manage certificate templates for courses and assessments"
                icon_name="award"
            >
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    " Create Certificate Template"
                </Button>
            </PageHeader>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Template Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Linked To"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Type"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Created"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Last Updated"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let templates = list.with(|l| l.templates().to_vec());
                        if templates.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="7">
                                        <div class="table__empty">
                                            "No certificate templates found. Create your first template."
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        templates
                            .into_iter()
                            .map(|t| {
                                let for_preview = t.clone();
                                let edit_id = t.id.clone();
                                let delete_id = t.id.clone();
                                let status_variant = if t.status.is_active() {
                                    "status-pill--success"
                                } else {
                                    "status-pill--neutral"
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout><strong>{t.name.clone()}</strong></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{t.linked_item_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusPill variant=linked_type_variant(t.linked_type)>
                                                {t.linked_type.display_name()}
                                            </StatusPill>
                                        </TableCell>
                                        <TableCell>
                                            <StatusPill variant=status_variant>
                                                {t.status.display_name()}
                                            </StatusPill>
                                        </TableCell>
                                        <TableCell>{display_date(t.created_at)}</TableCell>
                                        <TableCell>{display_date(t.updated_at)}</TableCell>
                                        <TableCell>
                                            <div class="row-actions">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title="Preview"
                                                    on_click=move |_| previewing.set(Some(for_preview.clone()))
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title="Edit"
                                                    on_click=move |_| open_edit(edit_id.clone())
                                                >
                                                    {icon("pencil")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title="Delete"
                                                    class="row-actions__danger"
                                                    on_click=move |_| ask_delete(delete_id.clone())
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>

            {move || previewing.get().map(|t| view! {
                <CertificatePreviewModal
                    content=t.content.clone()
                    course_name=t.linked_item_name.clone()
                    on_close=Callback::new(move |_| previewing.set(None))
                />
            })}

            <Dialog open=confirm_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Delete Certificate Template?"</DialogTitle>
                        <DialogContent>
                            "This action cannot be undone. This will permanently delete the certificate template."
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    pending_delete.set(None);
                                    confirm_open.set(false);
                                }
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                class="button--danger"
                                on_click=confirm_delete
                            >
                                "Delete"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
