use super::{pill, ExportButtons, OptionFilter};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::{
    attendance_events, mark_attendance, AttendanceFilter, AttendanceStats,
};
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::{AttendanceRecord, AttendanceStatus};
use contracts::shared::search::ALL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TrainerAttendancePage() -> impl IntoView {
    let toast = use_toast();
    let records = RwSignal::new(fixtures::attendance());

    let search = RwSignal::new(String::new());
    let event = RwSignal::new(ALL.to_string());
    let status = RwSignal::new(ALL.to_string());

    // Counters cover every record, not just the filtered ones
    let stats = Memo::new(move |_| records.with(|rs| AttendanceStats::of(rs)));
    let event_options = Signal::derive(move || {
        records.with(|rs| {
            attendance_events(rs)
                .into_iter()
                .map(|e| (e.clone(), e))
                .collect::<Vec<_>>()
        })
    });
    let status_options = Signal::derive(|| {
        AttendanceStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let visible = Memo::new(move |_| {
        let filter = AttendanceFilter {
            search: search.get(),
            event: event.get(),
            status: status.get(),
        };
        records.with(|rs| filter.apply(rs).into_iter().cloned().collect::<Vec<AttendanceRecord>>())
    });

    let mark = move |id: String, to: AttendanceStatus| {
        if records.try_update(|rs| mark_attendance(rs, &id, to)).unwrap_or(false) {
            log::info!("attendance {} marked {}", id, to.code());
            toast.success(format!("Attendance marked as {}", to.code()));
        }
    };

    view! {
        <PageFrame page_id="trainer--attendance" category=PAGE_CAT_LIST>
            <PageHeader title="Attendance Tracking" subtitle="Track and manage event attendance">
                <ExportButtons subject="attendance" formats=&["EXCEL", "PDF"] />
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Records" icon_name="clipboard-list"
                    value=Signal::derive(move || stats.get().total.to_string()) />
                <StatCard label="Present" icon_name="check-circle" tone=StatTone::Success
                    value=Signal::derive(move || stats.get().present.to_string()) />
                <StatCard label="Absent" icon_name="x-circle" tone=StatTone::Error
                    value=Signal::derive(move || stats.get().absent.to_string()) />
                <StatCard label="Pending" icon_name="clock" tone=StatTone::Warning
                    value=Signal::derive(move || stats.get().pending.to_string()) />
            </div>

            <div class="list-filters">
                <SearchInput value=search placeholder="Search by user name..." />
                <OptionFilter value=event all_label="All Events" options=event_options />
                <OptionFilter value=status all_label="All Status" options=status_options />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=160.0>"User Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Event Name"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Time"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let query = search.get_untracked();
                        visible
                            .get()
                            .into_iter()
                            .map(|r| {
                                let present_id = r.id.clone();
                                let absent_id = r.id.clone();
                                let pending = r.status == AttendanceStatus::Pending;
                                let user_name_hl = highlight_matches(&r.user_name, &query);
                                view! {
                                    <TableRow>
                                        <TableCell><strong>{user_name_hl}</strong></TableCell>
                                        <TableCell>{r.event_name.clone()}</TableCell>
                                        <TableCell>{r.date.clone()}</TableCell>
                                        <TableCell>{r.time.clone()}</TableCell>
                                        <TableCell>
                                            <StatusPill variant=pill(r.status.badge_variant())>
                                                {r.status.display_name()}
                                            </StatusPill>
                                        </TableCell>
                                        <TableCell>
                                            {pending.then(|| view! {
                                                <div class="row-actions">
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| mark(present_id.clone(), AttendanceStatus::Present)
                                                    >
                                                        {icon("check-circle")}
                                                        " Present"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| mark(absent_id.clone(), AttendanceStatus::Absent)
                                                    >
                                                        {icon("x-circle")}
                                                        " Absent"
                                                    </Button>
                                                </div>
                                            })}
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </PageFrame>
    }
}
