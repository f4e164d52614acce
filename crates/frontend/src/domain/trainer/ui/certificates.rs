use super::OptionFilter;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::{IssueStats, IssuedCertificateFilter};
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::{IssueStatus, IssuedCertificate};
use contracts::shared::search::ALL;
use contracts::shared::validation::require;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TrainerCertificatesPage() -> impl IntoView {
    let toast = use_toast();
    let certificates = StoredValue::new(fixtures::issued_certificates());

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(ALL.to_string());
    let upload_open = RwSignal::new(false);
    let template_name = RwSignal::new(String::new());

    let stats = certificates.with_value(|cs| IssueStats::of(cs));
    let status_options = [IssueStatus::Issued, IssueStatus::Pending]
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect::<Vec<_>>();

    let visible = Memo::new(move |_| {
        let filter = IssuedCertificateFilter {
            search: search.get(),
            status: status.get(),
        };
        certificates.with_value(|cs| {
            filter
                .apply(cs)
                .into_iter()
                .cloned()
                .collect::<Vec<IssuedCertificate>>()
        })
    });

    let upload = move |_: leptos::ev::MouseEvent| {
        let name = template_name.get_untracked();
        if let Err(e) = require(&name, "Template name is required") {
            toast.error(e.message());
            return;
        }
        log::info!("certificate template '{}' uploaded", name.trim());
        template_name.set(String::new());
        upload_open.set(false);
        toast.success("Template uploaded successfully");
    };

    view! {
        <PageFrame page_id="trainer--certificates" category=PAGE_CAT_LIST>
            <PageHeader title="Certificates" subtitle="Manage and issue training certificates">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| upload_open.set(true)>
                    {icon("upload")}
                    " Upload Template"
                </Button>
            </PageHeader>

            <div class="stat-grid stat-grid--3">
                <StatCard label="Total Certificates" icon_name="award" value=stats.total.to_string() />
                <StatCard label="Issued" icon_name="badge-check" tone=StatTone::Success value=stats.issued.to_string() />
                <StatCard label="Pending" icon_name="clock" tone=StatTone::Warning value=stats.pending.to_string() />
            </div>

            <div class="list-filters">
                <SearchInput value=search placeholder="Search by name or certificate ID..." />
                <OptionFilter value=status all_label="All Status" options=status_options />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=120.0>"Certificate ID"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=150.0>"User Name"</TableHeaderCell>
                        <TableHeaderCell>"Course"</TableHeaderCell>
                        <TableHeaderCell>"Module"</TableHeaderCell>
                        <TableHeaderCell>"Training"</TableHeaderCell>
                        <TableHeaderCell>"Completion Date"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let query = search.get_untracked();
                        visible
                            .get()
                            .into_iter()
                            .map(|c| {
                                let pending = c.status == IssueStatus::Pending;
                                let variant = if pending { "status-pill--warning" } else { "status-pill--primary" };
                                let certificate_id_hl = highlight_matches(&c.certificate_id, &query);
                                let user_name_hl = highlight_matches(&c.user_name, &query);
                                view! {
                                    <TableRow>
                                        <TableCell><code>{certificate_id_hl}</code></TableCell>
                                        <TableCell><strong>{user_name_hl}</strong></TableCell>
                                        <TableCell>{c.course_name.clone()}</TableCell>
                                        <TableCell>{c.module_name.clone()}</TableCell>
                                        <TableCell>{c.training_name.clone()}</TableCell>
                                        <TableCell>{c.completion_date.clone()}</TableCell>
                                        <TableCell><StatusPill variant=variant>{c.status.display_name()}</StatusPill></TableCell>
                                        <TableCell>
                                            <div class="row-actions">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title="Preview"
                                                    on_click=move |_| toast.info("Opening certificate preview...")
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title="Download"
                                                    disabled=pending
                                                    on_click=move |_| toast.success("Downloading certificate...")
                                                >
                                                    {icon("download")}
                                                </Button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            <Dialog open=upload_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Upload Certificate Template"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">"Upload a new certificate template for training completion"</p>
                            <Flex vertical=true>
                                <Label>"Template Name"</Label>
                                <Input value=template_name placeholder="Enter template name" />
                                <Label>"Template File"</Label>
                                <div class="dropzone">
                                    {icon("upload")}
                                    <p>"Upload PDF or image template"</p>
                                </div>
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| upload_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=upload>
                                "Upload"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
