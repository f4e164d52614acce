use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::trainer::filters::{events_on, remove_by_id};
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::forms::EventDraft;
use contracts::domain::trainer::{EventMode, TrainingEvent};
use contracts::shared::date_format::format_short_date;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

fn mode_icon(mode: EventMode) -> &'static str {
    match mode {
        EventMode::Online => "video",
        EventMode::Physical => "map-pin",
    }
}

#[component]
fn EventCard(event: TrainingEvent, on_delete: Callback<String>) -> impl IntoView {
    let id = event.id.clone();
    let mode_variant = match event.mode {
        EventMode::Online => "status-pill--info",
        EventMode::Physical => "status-pill--outline",
    };
    let date = if event.date.is_empty() {
        "No date".to_string()
    } else {
        format_short_date(&event.date)
    };

    view! {
        <Card class="event-card">
            <div class="event-card__main">
                <div class="event-card__title-row">
                    <h3>{event.name.clone()}</h3>
                    <StatusPill variant=mode_variant>
                        {icon(mode_icon(event.mode))}
                        {event.mode.display_name()}
                    </StatusPill>
                </div>
                <p class="text-muted">{event.course.clone()}</p>
                <div class="event-card__facts">
                    <span>{icon("calendar")}{date}</span>
                    <span>{icon("clock")}{event.time.clone()}</span>
                    <span>{icon("users")}{format!("{}/{}", event.enrolled, event.max_participants)}</span>
                    <span>{icon(mode_icon(event.mode))}{event.location.clone()}</span>
                </div>
            </div>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                attr:title="Delete Event"
                class="row-actions__danger"
                on_click=move |_| on_delete.run(id.clone())
            >
                {icon("trash")}
            </Button>
        </Card>
    }
}

#[component]
pub fn TrainerEventsPage() -> impl IntoView {
    let toast = use_toast();
    let events = RwSignal::new(fixtures::events());
    let course_names: Vec<String> = fixtures::courses().into_iter().map(|c| c.name).collect();

    // Empty means "all upcoming"
    let selected_date = RwSignal::new(String::new());

    let create_open = RwSignal::new(false);
    let defaults = EventDraft::default();
    let name = RwSignal::new(String::new());
    let course = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let mode = RwSignal::new(defaults.mode.code().to_string());
    let location = RwSignal::new(String::new());
    let max_participants = RwSignal::new(defaults.max_participants.to_string());

    let visible = Memo::new(move |_| {
        let picked = selected_date.get();
        let picked = (!picked.is_empty()).then_some(picked);
        events.with(|es| {
            events_on(es, picked.as_deref())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let heading = move || {
        let picked = selected_date.get();
        if picked.is_empty() {
            "All Upcoming Events".to_string()
        } else {
            format!("Events on {}", format_short_date(&picked))
        }
    };

    let is_online = Signal::derive(move || mode.with(|m| m == EventMode::Online.code()));

    let create = move |_: leptos::ev::MouseEvent| {
        let Ok(max) = max_participants.get_untracked().trim().parse::<u32>() else {
            toast.error("Max participants must be a whole number");
            return;
        };
        let draft = EventDraft {
            name: name.get_untracked(),
            course: course.get_untracked(),
            date: date.get_untracked(),
            time: time.get_untracked(),
            mode: EventMode::from_code(&mode.get_untracked()).unwrap_or(EventMode::Online),
            location: location.get_untracked(),
            max_participants: max,
        };
        match draft.into_event(Uuid::new_v4().to_string()) {
            Ok(event) => {
                log::info!("event {} scheduled for '{}'", event.id, event.date);
                events.update(|es| es.push(event));
                for field in [name, course, date, time, location] {
                    field.set(String::new());
                }
                create_open.set(false);
                toast.success("Event created successfully");
            }
            Err(e) => toast.error(e.message()),
        }
    };

    let on_delete = Callback::new(move |id: String| {
        if events.try_update(|es| remove_by_id(es, &id, |e| e.id.as_str())).unwrap_or(false) {
            toast.success("Event deleted");
        }
    });

    view! {
        <PageFrame page_id="trainer--events" category=PAGE_CAT_LIST>
            <PageHeader title="Events & Calendar" subtitle="Schedule and manage training events">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| create_open.set(true)>
                    {icon("plus")}
                    " Create Event"
                </Button>
            </PageHeader>

            <div class="events-layout">
                <Card class="events-layout__calendar">
                    <h3>"Calendar"</h3>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || selected_date.get()
                        on:change=move |ev| selected_date.set(event_target_value(&ev))
                    />
                    <Show when=move || !selected_date.with(String::is_empty)>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| selected_date.set(String::new())
                        >
                            "Show all events"
                        </Button>
                    </Show>
                </Card>

                <section class="events-layout__list">
                    <h2>{heading}</h2>
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! {
                            <div class="empty-state">
                                <div class="empty-state__icon">{icon("calendar")}</div>
                                <p>"No events scheduled"</p>
                            </div>
                        }
                    >
                        <For
                            each=move || visible.get()
                            key=|e| e.id.clone()
                            children=move |e: TrainingEvent| view! { <EventCard event=e on_delete=on_delete /> }
                        />
                    </Show>
                </section>
            </div>

            <Dialog open=create_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Create New Event"</DialogTitle>
                        <DialogContent>
                            <p class="text-muted">"Schedule a new training event"</p>
                            <Flex vertical=true>
                                <Label>"Event Name *"</Label>
                                <Input value=name placeholder="Enter event name" />
                                <Label>"Linked Course *"</Label>
                                <Select value=course>
                                    <option value="">"Select course"</option>
                                    {course_names
                                        .into_iter()
                                        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                        .collect_view()}
                                </Select>
                                <Flex>
                                    <Flex vertical=true>
                                        <Label>"Date"</Label>
                                        <Input value=date input_type=InputType::Date />
                                    </Flex>
                                    <Flex vertical=true>
                                        <Label>"Time"</Label>
                                        <Input value=time input_type=InputType::Time />
                                    </Flex>
                                </Flex>
                                <Label>"Mode"</Label>
                                <Select value=mode>
                                    <option value=EventMode::Online.code()>{EventMode::Online.display_name()}</option>
                                    <option value=EventMode::Physical.code()>{EventMode::Physical.display_name()}</option>
                                </Select>
                                <Label>{move || if is_online.get() { "Meeting Link" } else { "Location" }}</Label>
                                <Input
                                    value=location
                                    placeholder=Signal::derive(move || {
                                        if is_online.get() { "Enter meeting link" } else { "Enter location" }.to_string()
                                    })
                                />
                                <Label>"Max Participants"</Label>
                                <Input value=max_participants input_type=InputType::Number />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| create_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=create>
                                "Create Event"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
