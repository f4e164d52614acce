use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{ProgressMeter, StatusPill};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::learner::fixtures;
use contracts::domain::learner::progress::upcoming_events;
use contracts::domain::learner::{ActivityEntry, AttendanceMode, CurrentCourse};
use contracts::shared::date_format::display_date;
use leptos::prelude::*;
use thaw::*;

const DASHBOARD_EVENTS: usize = 3;

/// KPI icons come from the fixture as plain strings
fn kpi_icon(name: &str) -> &'static str {
    match name {
        "book-open" => "book-open",
        "play-circle" => "play-circle",
        "check-circle" => "check-circle",
        "calendar" => "calendar",
        _ => "activity",
    }
}

#[component]
fn CourseProgressRow(course: CurrentCourse) -> impl IntoView {
    let percent = u32::from(course.progress);
    view! {
        <div class="course-progress">
            <div class="course-progress__head">
                <h4>{course.name.clone()}</h4>
                <StatusPill variant="status-pill--outline">{format!("{}%", percent)}</StatusPill>
            </div>
            <ProgressMeter percent=percent hide_label=true />
            <div class="course-progress__meta text-muted">
                <span>{format!("{} of {} modules completed", course.modules_completed, course.total_modules)}</span>
                <span>{format!("Last accessed: {}", course.last_accessed)}</span>
            </div>
        </div>
    }
}

#[component]
fn TodayActivity() -> impl IntoView {
    let activity = fixtures::screen_activity();
    let focus = u32::from(activity.focus_score);

    view! {
        <Card class="chart-card">
            <h3>{icon("activity")}" Today's Activity"</h3>
            <div class="today-activity__split">
                <div class="today-activity__tile today-activity__tile--active">
                    <strong>{activity.active_time.clone()}</strong>
                    <span class="text-muted">"Active Time"</span>
                </div>
                <div class="today-activity__tile today-activity__tile--idle">
                    <strong>{activity.idle_time.clone()}</strong>
                    <span class="text-muted">"Idle Time"</span>
                </div>
            </div>
            <div class="today-activity__focus">
                <span>"Focus Score"</span>
                <ProgressMeter percent=focus />
            </div>
            <div class="today-activity__sessions">
                <span>"Sessions Today"</span>
                <strong>{activity.sessions_today}</strong>
            </div>
        </Card>
    }
}

#[component]
fn ActivityTimeline(entries: Vec<ActivityEntry>) -> impl IntoView {
    let last = entries.len().saturating_sub(1);
    entries
        .into_iter()
        .enumerate()
        .map(|(i, a)| {
            let marker = if a.completed {
                "timeline__marker timeline__marker--done"
            } else {
                "timeline__marker timeline__marker--active"
            };
            let has_duration = a.duration != "-";
            view! {
                <div class="timeline__item">
                    <div class="timeline__rail">
                        <span class=marker>{icon(a.kind.icon_name())}</span>
                        {(i < last).then(|| view! { <span class="timeline__line"></span> })}
                    </div>
                    <div class="timeline__body">
                        <p class="timeline__title">{a.title.clone()}</p>
                        <p class="text-muted">{a.course.clone()}</p>
                        <p class="timeline__meta text-muted">
                            {a.time.clone()}
                            {has_duration.then(|| format!(" • {}", a.duration))}
                        </p>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn LearnerDashboardPage() -> impl IntoView {
    let events = fixtures::calendar_events();
    let upcoming = upcoming_events(&events)
        .into_iter()
        .take(DASHBOARD_EVENTS)
        .cloned()
        .collect::<Vec<_>>();

    view! {
        <PageFrame page_id="learner--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Welcome back!" subtitle="Continue your learning journey" />

            <div class="stat-grid">
                {fixtures::dashboard_kpis()
                    .into_iter()
                    .map(|k| view! {
                        <StatCard label=k.title icon_name=kpi_icon(&k.icon) value=k.value hint=k.change />
                    })
                    .collect_view()}
            </div>

            <div class="dashboard-grid dashboard-grid--wide-left">
                <Card class="chart-card">
                    <h3>{icon("play-circle")}" Courses In Progress"</h3>
                    {fixtures::current_courses()
                        .into_iter()
                        .map(|c| view! { <CourseProgressRow course=c /> })
                        .collect_view()}
                </Card>
                <TodayActivity />
            </div>

            <div class="dashboard-grid">
                <Card class="chart-card">
                    <h3>{icon("clock")}" Recent Activity"</h3>
                    <div class="timeline">
                        <ActivityTimeline entries=fixtures::activity_timeline() />
                    </div>
                </Card>
                <Card class="chart-card">
                    <h3>{icon("calendar")}" Upcoming Events"</h3>
                    {upcoming
                        .into_iter()
                        .map(|e| {
                            let variant = match e.mode {
                                AttendanceMode::Online => "status-pill--primary",
                                AttendanceMode::Physical => "status-pill--neutral",
                            };
                            view! {
                                <div class="upcoming-row">
                                    <div>
                                        <p class="upcoming-row__name">{e.name.clone()}</p>
                                        <p class="text-muted">{format!("{} at {}", display_date(e.date), e.time)}</p>
                                    </div>
                                    <StatusPill variant=variant>{e.mode.display_name()}</StatusPill>
                                </div>
                            }
                        })
                        .collect_view()}
                </Card>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kpi_icon_falls_back() {
        assert_eq!(kpi_icon("calendar"), "calendar");
        assert_eq!(kpi_icon("monitor"), "activity");
    }
}
