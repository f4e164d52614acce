use super::{pill, OptionFilter};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{ProgressMeter, StatusPill};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::{learner_groups, set_learner_status, LearnerFilter};
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::{AssignedLearner, LearnerStatus};
use contracts::shared::search::ALL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TrainerUsersPage() -> impl IntoView {
    let toast = use_toast();
    let learners = RwSignal::new(fixtures::learners());

    let search = RwSignal::new(String::new());
    let group = RwSignal::new(ALL.to_string());
    let status = RwSignal::new(ALL.to_string());

    let group_options = Signal::derive(move || {
        learners.with(|ls| {
            learner_groups(ls)
                .into_iter()
                .map(|g| (g.clone(), g))
                .collect::<Vec<_>>()
        })
    });
    let status_options = Signal::derive(|| {
        LearnerStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let visible = Memo::new(move |_| {
        let filter = LearnerFilter {
            search: search.get(),
            group: group.get(),
            status: status.get(),
        };
        learners.with(|ls| filter.apply(ls).into_iter().cloned().collect::<Vec<AssignedLearner>>())
    });

    let change_status = move |id: String, to: LearnerStatus| {
        let changed = learners
            .try_update(|ls| set_learner_status(ls, &id, to))
            .unwrap_or(false);
        if changed {
            log::info!("learner {} set to {}", id, to.code());
            toast.success(match to {
                LearnerStatus::Active => "User reactivated",
                _ => "User deactivated",
            });
        }
    };

    view! {
        <PageFrame page_id="trainer--users" category=PAGE_CAT_LIST>
            <PageHeader title="Assigned Users" subtitle="Manage and track all assigned learners">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| toast.success("Exporting all users...")
                >
                    {icon("download")}
                    " Export All"
                </Button>
            </PageHeader>

            <div class="list-filters">
                <SearchInput value=search placeholder="Search by name or email..." />
                <OptionFilter value=group all_label="All Groups" options=group_options />
                <OptionFilter value=status all_label="All Status" options=status_options />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=160.0>"User Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Email"</TableHeaderCell>
                        <TableHeaderCell>"Group"</TableHeaderCell>
                        <TableHeaderCell>"Assigned Course"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Progress"</TableHeaderCell>
                        <TableHeaderCell>"Last Active"</TableHeaderCell>
                        <TableHeaderCell>"Attempts"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = visible.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="9">
                                        <div class="table__empty">"No users match the current filters."</div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        let query = search.get_untracked();
                        rows.into_iter()
                            .map(|l| {
                                let id = l.id.clone();
                                let report_name = l.name.clone();
                                let is_active = l.status == LearnerStatus::Active;
                                let (toggle_icon, toggle_title, target) = if is_active {
                                    ("x-circle", "Deactivate", LearnerStatus::Inactive)
                                } else {
                                    ("user-check", "Reactivate", LearnerStatus::Active)
                                };
                                let name_hl = highlight_matches(&l.name, &query);
                                let email_hl = highlight_matches(&l.email, &query);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong>{name_hl}</strong>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{email_hl}</TableCell>
                                        <TableCell>{l.group.clone()}</TableCell>
                                        <TableCell>{l.assigned_course.clone()}</TableCell>
                                        <TableCell><ProgressMeter percent=u32::from(l.progress) /></TableCell>
                                        <TableCell>{l.last_active.clone()}</TableCell>
                                        <TableCell>{l.attempts}</TableCell>
                                        <TableCell>
                                            <StatusPill variant=pill(l.status.badge_variant())>
                                                {l.status.display_name()}
                                            </StatusPill>
                                        </TableCell>
                                        <TableCell>
                                            <div class="row-actions">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title=toggle_title
                                                    on_click=move |_| change_status(id.clone(), target)
                                                >
                                                    {icon(toggle_icon)}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title="Download Report"
                                                    on_click=move |_| {
                                                        log::debug!("progress report for {}", report_name);
                                                        toast.success("Downloading progress report...");
                                                    }
                                                >
                                                    {icon("download")}
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
        </PageFrame>
    }
}
