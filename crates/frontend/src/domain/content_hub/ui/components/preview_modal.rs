use super::content_table::TypeBadge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::content_hub::ContentRow;
use contracts::enums::ContentType;
use leptos::prelude::*;
use thaw::*;

const SAMPLE_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];

fn preview_body(row: &ContentRow) -> AnyView {
    match row.content_type {
        ContentType::Video => {
            let duration = row.duration.clone().unwrap_or_else(|| "N/A".to_string());
            view! {
                <div class="preview preview--video">
                    <div class="preview__play">{icon("play-circle")}</div>
                    <p>"Video Preview"</p>
                    <p class="muted">{format!("Duration: {}", duration)}</p>
                </div>
            }
            .into_any()
        }
        ContentType::Pdf => view! {
            <div class="preview preview--pdf">
                <div class="preview__icon">{icon("file-text")}</div>
                <p>"PDF Document"</p>
                <Button>{icon("download")}" Download PDF"</Button>
            </div>
        }
        .into_any(),
        ContentType::Text => view! {
            <div class="preview preview--text">
                <p>
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor \
                     incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
                     nostrud exercitation ullamco laboris."
                </p>
            </div>
        }
        .into_any(),
        ContentType::Quiz => view! {
            <div class="preview preview--quiz">
                <div class="preview__question">
                    <p class="preview__question-title">"Sample Question 1"</p>
                    {SAMPLE_OPTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, opt)| {
                            let letter = char::from(b'A' + i as u8).to_string();
                            view! {
                                <label class="preview__option">
                                    <span class="preview__option-letter">{letter}</span>
                                    {*opt}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="muted">"This is a preview. Start the quiz to answer questions."</p>
            </div>
        }
        .into_any(),
        ContentType::Assessment => view! {
            <div class="preview preview--assessment">
                <div class="preview__icon">{icon("clipboard-check")}</div>
                <h4>"Assessment Preview"</h4>
                <p class="muted">
                    "This assessment contains multiple sections to evaluate your knowledge."
                </p>
                <Button>{icon("play-circle")}" Start Assessment"</Button>
            </div>
        }
        .into_any(),
    }
}

/// Type-specific mock rendering of a lesson
#[component]
pub fn ContentPreviewModal(row: ContentRow, on_close: Callback<()>) -> impl IntoView {
    let body = preview_body(&row);
    let title = row.title.clone();

    view! {
        <Modal title=title on_close=on_close size="lg">
            <div class="preview__meta">
                <TypeBadge content_type=row.content_type />
                {row.duration.clone().map(|d| view! { <span class="muted">{d}</span> })}
            </div>
            {body}
        </Modal>
    }
}
