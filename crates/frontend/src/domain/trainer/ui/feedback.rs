use super::{stars, ExportButtons, OptionFilter};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::trainer::filters::{feedback_courses, FeedbackFilter, FeedbackStats};
use contracts::domain::trainer::fixtures;
use contracts::domain::trainer::FeedbackEntry;
use contracts::shared::search::ALL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TrainerFeedbackPage() -> impl IntoView {
    let entries = StoredValue::new(fixtures::feedback());

    let search = RwSignal::new(String::new());
    let course = RwSignal::new(ALL.to_string());

    let stats = entries.with_value(|es| FeedbackStats::of(es));
    let course_options = entries.with_value(|es| {
        feedback_courses(es)
            .into_iter()
            .map(|c| (c.clone(), c))
            .collect::<Vec<_>>()
    });

    let visible = Memo::new(move |_| {
        let filter = FeedbackFilter {
            search: search.get(),
            course: course.get(),
        };
        entries.with_value(|es| filter.apply(es).into_iter().cloned().collect::<Vec<FeedbackEntry>>())
    });

    view! {
        <PageFrame page_id="trainer--feedback" category=PAGE_CAT_LIST>
            <PageHeader title="Feedback" subtitle="View and analyze training feedback from learners">
                <ExportButtons subject="feedback" formats=&["CSV", "PDF"] />
            </PageHeader>

            <div class="stat-grid stat-grid--3">
                <StatCard label="Total Feedback" icon_name="message-square" value=stats.total.to_string() />
                <StatCard
                    label="Avg. Trainer Rating"
                    icon_name="star"
                    tone=StatTone::Warning
                    value=FeedbackStats::format_rating(stats.avg_trainer_rating)
                />
                <StatCard
                    label="Avg. Content Rating"
                    icon_name="star"
                    tone=StatTone::Warning
                    value=FeedbackStats::format_rating(stats.avg_content_rating)
                />
            </div>

            <div class="list-filters">
                <SearchInput value=search placeholder="Search feedback..." />
                <OptionFilter value=course all_label="All Courses" options=course_options />
            </div>

            <div class="feedback-list">
                {move || {
                    let query = search.get_untracked();
                    let items = visible.get();
                    if items.is_empty() {
                        return view! { <div class="empty-state"><p>"No feedback found"</p></div> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|f| {
                            let user_name_hl = highlight_matches(&f.user_name, &query);
                            let comments_hl = highlight_matches(&f.comments, &query);
                            view! {
                            <Card class="feedback-card">
                                <div class="feedback-card__body">
                                    <div class="feedback-card__who">
                                        <h3>{user_name_hl}</h3>
                                        <span class="text-muted">"•"</span>
                                        <span class="text-muted">{f.course.clone()}</span>
                                    </div>
                                    <p>{comments_hl}</p>
                                    <p class="text-muted">{f.date.clone()}</p>
                                </div>
                                <div class="feedback-card__ratings">
                                    <div>
                                        <p class="text-muted">"Trainer"</p>
                                        <span class="stars" title=format!("{}/5", f.trainer_rating)>{stars(f.trainer_rating)}</span>
                                    </div>
                                    <div>
                                        <p class="text-muted">"Content"</p>
                                        <span class="stars" title=format!("{}/5", f.content_rating)>{stars(f.content_rating)}</span>
                                    </div>
                                </div>
                            </Card>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}
