use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{ProgressMeter, StatusPill};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::trainer::dashboard::{
    assessment_split, attendance_weeks, completion_trend, kpi_cards, recent_activity, Trend,
    TrendPoint,
};
use leptos::prelude::*;
use thaw::*;

const CHART_W: f64 = 600.0;
const CHART_H: f64 = 200.0;

/// SVG polyline points for percentages on a fixed 0..=100 axis
fn trend_points(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let step = if points.len() > 1 {
        CHART_W / (points.len() - 1) as f64
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 * step;
            let y = CHART_H - CHART_H * f64::from(p.value.min(100)) / 100.0;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn CompletionTrend() -> impl IntoView {
    let points = completion_trend();
    let polyline = trend_points(&points);
    let view_box = format!("0 0 {} {}", CHART_W, CHART_H);

    view! {
        <Card class="chart-card chart-card--wide">
            <h3 class="chart-card__title">"Course Completion Trend"</h3>
            <svg class="line-chart" viewBox=view_box preserveAspectRatio="none">
                <polyline class="line-chart__line" points=polyline fill="none" />
            </svg>
            <div class="line-chart__labels">
                {points
                    .into_iter()
                    .map(|p| view! {
                        <span class="line-chart__label" title=format!("{}%", p.value)>{p.label}</span>
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn AssessmentResults() -> impl IntoView {
    let (pass, fail) = assessment_split();
    let ring = format!("--pass: {}%", pass);

    view! {
        <Card class="chart-card">
            <h3 class="chart-card__title">"Assessment Results"</h3>
            <div class="donut" style=ring>
                <span class="donut__value">{format!("{}%", pass)}</span>
            </div>
            <div class="chart-legend">
                <span class="chart-legend__item chart-legend__item--pass">{format!("Pass: {}%", pass)}</span>
                <span class="chart-legend__item chart-legend__item--fail">{format!("Fail: {}%", fail)}</span>
            </div>
        </Card>
    }
}

#[component]
fn AttendanceChart() -> impl IntoView {
    let weeks = attendance_weeks();
    let max = weeks.iter().map(|w| w.enrolled.max(w.attended)).max().unwrap_or(1).max(1);
    let height = move |v: u32| format!("height: {}%", v * 100 / max);

    view! {
        <Card class="chart-card">
            <h3 class="chart-card__title">"Attendance vs Enrollment"</h3>
            <div class="bar-chart">
                {weeks
                    .into_iter()
                    .map(|w| view! {
                        <div class="bar-chart__group" title=format!("{}% attended", w.rate())>
                            <div class="bar-chart__bars">
                                <div class="bar-chart__bar bar-chart__bar--enrolled" style=height(w.enrolled)></div>
                                <div class="bar-chart__bar bar-chart__bar--attended" style=height(w.attended)></div>
                            </div>
                            <span class="bar-chart__label">{w.label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="chart-legend">
                <span class="chart-legend__item chart-legend__item--enrolled">"Enrolled"</span>
                <span class="chart-legend__item chart-legend__item--attended">"Attended"</span>
            </div>
        </Card>
    }
}

#[component]
pub fn TrainerDashboardPage() -> impl IntoView {
    view! {
        <PageFrame page_id="trainer--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Trainer Dashboard"
                subtitle="Overview of your training activities and learner performance"
            />

            <div class="stat-grid stat-grid--5">
                {kpi_cards()
                    .into_iter()
                    .map(|kpi| {
                        let tone = match kpi.trend {
                            Trend::Up => StatTone::Success,
                            Trend::Neutral => StatTone::Neutral,
                        };
                        view! {
                            <StatCard
                                label=kpi.title
                                icon_name=kpi.icon
                                value=kpi.value.to_string()
                                tone=tone
                                hint=kpi.change.to_string()
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="chart-row">
                <CompletionTrend />
                <AssessmentResults />
            </div>
            <AttendanceChart />

            <Card class="chart-card">
                <h3 class="chart-card__title">"Recent Activity"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Course Name"</TableHeaderCell>
                            <TableHeaderCell>"User Count"</TableHeaderCell>
                            <TableHeaderCell>"Completion %"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {recent_activity()
                            .into_iter()
                            .map(|a| {
                                let (label, variant) = if a.completed {
                                    ("Completed", "status-pill--success")
                                } else {
                                    ("In Progress", "status-pill--info")
                                };
                                view! {
                                    <TableRow>
                                        <TableCell><strong>{a.course}</strong></TableCell>
                                        <TableCell>{a.users}</TableCell>
                                        <TableCell><ProgressMeter percent=a.completion /></TableCell>
                                        <TableCell><StatusPill variant=variant>{label}</StatusPill></TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </Card>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_points_span_the_chart() {
        let points = [
            TrendPoint { label: "Jan", value: 0 },
            TrendPoint { label: "Feb", value: 100 },
        ];
        assert_eq!(trend_points(&points), "0.0,200.0 600.0,0.0");
        assert_eq!(trend_points(&[]), "");
    }
}
