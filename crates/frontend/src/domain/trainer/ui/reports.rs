use super::OptionFilter;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::{report_assessments, ReportFilter, ReportStats};
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::{AssessmentReport, ResultStatus};
use contracts::shared::search::ALL;
use leptos::prelude::*;
use thaw::*;

/// Score colour bands: 80+ good, 60+ borderline, below that failing
fn score_class(score: u32) -> &'static str {
    if score >= 80 {
        "score score--good"
    } else if score >= 60 {
        "score score--warn"
    } else {
        "score score--bad"
    }
}

#[component]
pub fn TrainerReportsPage() -> impl IntoView {
    let toast = use_toast();
    let reports = StoredValue::new(fixtures::reports());

    let search = RwSignal::new(String::new());
    let result = RwSignal::new(ALL.to_string());
    let assessment = RwSignal::new(ALL.to_string());

    let stats = reports.with_value(|rs| ReportStats::of(rs));
    let assessment_options = reports.with_value(|rs| {
        report_assessments(rs)
            .into_iter()
            .map(|a| (a.clone(), a))
            .collect::<Vec<_>>()
    });
    let result_options = [ResultStatus::Pass, ResultStatus::Fail]
        .into_iter()
        .map(|r| (r.code().to_string(), r.display_name().to_string()))
        .collect::<Vec<_>>();

    let visible = Memo::new(move |_| {
        let filter = ReportFilter {
            search: search.get(),
            result: result.get(),
            assessment: assessment.get(),
        };
        reports.with_value(|rs| filter.apply(rs).into_iter().cloned().collect::<Vec<AssessmentReport>>())
    });

    let download = move |format: &str| {
        toast.success(format!("Downloading report as {}...", format));
    };

    view! {
        <PageFrame page_id="trainer--reports" category=PAGE_CAT_LIST>
            <PageHeader title="Assessment Reports" subtitle="View and analyze assessment results">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| download("EXCEL")>
                    {icon("download")}
                    " Export All"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Attempts" icon_name="file-text" value=stats.total.to_string() />
                <StatCard label="Passed" icon_name="check-circle" tone=StatTone::Success value=stats.passed.to_string() />
                <StatCard label="Failed" icon_name="x-circle" tone=StatTone::Error value=stats.failed.to_string() />
                <StatCard label="Avg. Score" icon_name="bar-chart" tone=StatTone::Info value=format!("{}%", stats.avg_score) />
            </div>

            <div class="list-filters">
                <SearchInput value=search placeholder="Search by user name..." />
                <OptionFilter value=assessment all_label="All Assessments" options=assessment_options />
                <OptionFilter value=result all_label="All Results" options=result_options />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=150.0>"User Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Assessment"</TableHeaderCell>
                        <TableHeaderCell>"Course"</TableHeaderCell>
                        <TableHeaderCell>"Attempts"</TableHeaderCell>
                        <TableHeaderCell>"Score"</TableHeaderCell>
                        <TableHeaderCell>"Result"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let query = search.get_untracked();
                        visible
                            .get()
                            .into_iter()
                            .map(|r| {
                                let result_variant = match r.result {
                                    ResultStatus::Pass => "status-pill--primary",
                                    ResultStatus::Fail => "status-pill--error",
                                };
                                let user_name_hl = highlight_matches(&r.user_name, &query);
                                view! {
                                    <TableRow>
                                        <TableCell><strong>{user_name_hl}</strong></TableCell>
                                        <TableCell>{r.assessment_name.clone()}</TableCell>
                                        <TableCell>{r.course.clone()}</TableCell>
                                        <TableCell>{r.attempt_count}</TableCell>
                                        <TableCell>
                                            <span class=score_class(r.score)>{format!("{}%", r.score)}</span>
                                        </TableCell>
                                        <TableCell>
                                            <StatusPill variant=result_variant>{r.result.display_name()}</StatusPill>
                                        </TableCell>
                                        <TableCell>{r.date.clone()}</TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                attr:title="Download PDF"
                                                on_click=move |_| download("PDF")
                                            >
                                                {icon("download")}
                                            </Button>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands() {
        assert_eq!(score_class(92), "score score--good");
        assert_eq!(score_class(80), "score score--good");
        assert_eq!(score_class(65), "score score--warn");
        assert_eq!(score_class(40), "score score--bad");
    }
}
