//! Training calendar. The selected day lives in the URL (`?date=YYYY-MM-DD`)
//! so a day can be linked to; a malformed date is a render error.

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BROWSE;
use crate::shared::toast::use_toast;
use chrono::{Datelike, NaiveDate, Utc};
use contracts::domain::learner::fixtures;
use contracts::domain::learner::progress::{event_days, events_for_date, upcoming_events};
use contracts::domain::learner::{AttendanceMode, CalendarEvent};
use contracts::shared::error::AppError;
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Missing or empty parameter means today
fn parse_date_param(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(today),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            AppError::Render(format!("invalid calendar date '{}', expected YYYY-MM-DD", s))
        }),
    }
}

fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

fn shift_month((year, month): (i32, u32), delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = shift_month((year, month), 1);
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Grid cells for a Sunday-first month view; `None` pads the first week
fn month_cells(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;
    std::iter::repeat(None)
        .take(lead)
        .chain((1..=days_in_month(year, month)).map(Some))
        .collect()
}

fn mode_variant(mode: AttendanceMode) -> &'static str {
    match mode {
        AttendanceMode::Online => "status-pill--primary",
        AttendanceMode::Physical => "status-pill--neutral",
    }
}

#[component]
fn MonthGrid(
    shown: RwSignal<(i32, u32)>,
    selected: NaiveDate,
    events: StoredValue<Vec<CalendarEvent>>,
    on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    let title = move || {
        let (y, m) = shown.get();
        NaiveDate::from_ymd_opt(y, m, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="month-grid">
            <div class="month-grid__nav">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    attr:title="Previous month"
                    on_click=move |_| shown.update(|m| *m = shift_month(*m, -1))
                >
                    {icon("chevron-left")}
                </Button>
                <strong>{title}</strong>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    attr:title="Next month"
                    on_click=move |_| shown.update(|m| *m = shift_month(*m, 1))
                >
                    {icon("chevron-right")}
                </Button>
            </div>
            <div class="month-grid__days">
                {WEEKDAYS.iter().map(|d| view! { <span class="month-grid__weekday">{*d}</span> }).collect_view()}
                {move || {
                    let (year, month) = shown.get();
                    let marked = events.with_value(|es| event_days(es, year, month));
                    month_cells(year, month)
                        .into_iter()
                        .map(|cell| match cell.and_then(|day| NaiveDate::from_ymd_opt(year, month, day)) {
                            None => view! { <span class="month-grid__pad"></span> }.into_any(),
                            Some(date) => {
                                let mut class = String::from("month-grid__day");
                                if marked.contains(&date.day()) {
                                    class.push_str(" month-grid__day--event");
                                }
                                if date == selected {
                                    class.push_str(" month-grid__day--selected");
                                }
                                view! {
                                    <button class=class on:click=move |_| on_pick.run(date)>
                                        {date.day()}
                                    </button>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="month-grid__legend text-muted">
                <span class="month-grid__dot"></span>
                " Days with events"
            </div>
        </div>
    }
}

#[component]
fn DayEventCard(event: CalendarEvent) -> impl IntoView {
    let toast = use_toast();
    let online = event.mode == AttendanceMode::Online;
    let place = if online {
        "Virtual Meeting".to_string()
    } else {
        event.location.clone()
    };
    let link = event.location.clone();

    view! {
        <div class="event-card event-card--day">
            <div class="event-card__head">
                <div>
                    <h3>{event.name.clone()}</h3>
                    <p class="text-muted">{event.course.clone()}</p>
                </div>
                <StatusPill variant=mode_variant(event.mode)>{event.mode.display_name()}</StatusPill>
            </div>
            <div class="event-card__facts text-muted">
                <span>{icon("clock")}{format!(" {}", event.time)}</span>
                <span>{icon("users")}{format!(" {}/{} enrolled", event.enrolled, event.max_participants)}</span>
                <span>{icon(if online { "video" } else { "map-pin" })}{format!(" {}", place)}</span>
            </div>
            <div class="event-card__footer">
                <span class="text-muted">{format!("Instructor: {}", event.instructor)}</span>
                {(online && event.upcoming).then(|| view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            log::info!("joining meeting {}", link);
                            toast.info("Opening meeting link...");
                        }
                    >
                        {icon("link")}
                        " Join Meeting"
                    </Button>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn LearnerCalendarPage() -> impl IntoView {
    let toast = use_toast();
    let query = use_query_map();
    let go = StoredValue::new(use_navigate());
    let events = StoredValue::new(fixtures::calendar_events());
    let today = Utc::now().date_naive();

    let selected = Memo::new(move |_| parse_date_param(query.read().get("date").as_deref(), today));
    let shown = RwSignal::new(month_of(selected.get_untracked().unwrap_or(today)));
    Effect::new(move |_| {
        if let Ok(date) = selected.get() {
            shown.set(month_of(date));
        }
    });

    let on_pick = Callback::new(move |date: NaiveDate| {
        go.with_value(|nav| nav(&routes::user_calendar_on(date), Default::default()));
    });

    let upcoming = events.with_value(|es| upcoming_events(es).into_iter().cloned().collect::<Vec<_>>());

    view! {
        <PageFrame page_id="learner--calendar" category=PAGE_CAT_BROWSE>
            <PageHeader title="Training Calendar" subtitle="View your scheduled training events" />

            {move || {
                selected.get().map(|date| {
                    let on_day = events.with_value(|es| {
                        events_for_date(es, date).into_iter().cloned().collect::<Vec<_>>()
                    });
                    view! {
                        <div class="dashboard-grid dashboard-grid--wide-right">
                            <Card class="chart-card">
                                <h3>{icon("calendar")}" Calendar"</h3>
                                <MonthGrid shown=shown selected=date events=events on_pick=on_pick />
                            </Card>
                            <Card class="chart-card">
                                <h3>{format!("Events on {}", date.format("%A, %B %-d, %Y"))}</h3>
                                {if on_day.is_empty() {
                                    view! {
                                        <div class="empty-state">
                                            {icon("calendar")}
                                            <p>"No events scheduled for this date"</p>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    on_day
                                        .into_iter()
                                        .map(|e| view! { <DayEventCard event=e /> })
                                        .collect_view()
                                        .into_any()
                                }}
                            </Card>
                        </div>
                    }
                })
            }}

            <Card class="chart-card">
                <h3>{icon("clock")}" Upcoming Events"</h3>
                {upcoming
                    .into_iter()
                    .map(|e| {
                        let date = e.date;
                        let online = e.mode == AttendanceMode::Online;
                        view! {
                            <div class="upcoming-row">
                                <div class="upcoming-row__date">
                                    <strong>{date.day()}</strong>
                                    <span class="text-muted">{date.format("%b").to_string()}</span>
                                </div>
                                <div class="upcoming-row__body">
                                    <h4>{e.name.clone()}</h4>
                                    <p class="text-muted">{e.course.clone()}</p>
                                    <p class="upcoming-row__meta text-muted">
                                        {icon("clock")}{format!(" {} ", e.time)}
                                        {icon(if online { "video" } else { "map-pin" })}{format!(" {}", e.mode.display_name())}
                                    </p>
                                </div>
                                <StatusPill variant="status-pill--outline">
                                    {format!("{}/{}", e.enrolled, e.max_participants)}
                                </StatusPill>
                                {if online {
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| toast.info("Opening meeting link...")
                                        >
                                            {icon("link")}
                                            " Join"
                                        </Button>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| on_pick.run(date)
                                        >
                                            "View Details"
                                        </Button>
                                    }
                                    .into_any()
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </Card>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_param_defaults_to_today() {
        let today = day(2026, 10, 16);
        assert_eq!(parse_date_param(None, today), Ok(today));
        assert_eq!(parse_date_param(Some("  "), today), Ok(today));
        assert_eq!(parse_date_param(Some("2026-01-25"), today), Ok(day(2026, 1, 25)));
    }

    #[test]
    fn malformed_date_param_is_render_error() {
        let err = parse_date_param(Some("25/01/2026"), day(2026, 1, 1)).unwrap_err();
        assert!(matches!(err, AppError::Render(ref m) if m.contains("25/01/2026")));
    }

    #[test]
    fn month_arithmetic_wraps_years() {
        assert_eq!(shift_month((2026, 1), -1), (2025, 12));
        assert_eq!(shift_month((2025, 12), 1), (2026, 1));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
    }

    #[test]
    fn month_cells_pad_to_weekday() {
        // 1 January 2026 is a Thursday
        let cells = month_cells(2026, 1);
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(cells.len(), 4 + 31);
        assert_eq!(cells.last(), Some(&Some(31)));
    }
}
