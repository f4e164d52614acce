use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::content_hub::ContentDraft;
use contracts::enums::{ContentSource, ContentType};
use leptos::prelude::*;
use thaw::*;

/// "Add New Content" form. Emits a validated draft; the caller assigns the
/// id and position.
#[component]
pub fn AddContentModal(
    /// Name of the module the content goes to
    #[prop(optional, into)]
    target: Option<String>,
    on_close: Callback<()>,
    on_submit: Callback<ContentDraft>,
) -> impl IntoView {
    let toast = use_toast();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let content_type = RwSignal::new(ContentType::Video);
    let source = RwSignal::new(ContentSource::Upload);
    let url = RwSignal::new(String::new());

    let submit = move |_: leptos::ev::MouseEvent| {
        let draft = ContentDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            content_type: Some(content_type.get_untracked()),
            source: source.get_untracked(),
            url: url.get_untracked(),
        };
        match draft.validate() {
            Ok(_) => on_submit.run(draft),
            Err(e) => toast.error(e.message()),
        }
    };

    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Button on_click=move |_| on_close.run(())>"Cancel"</Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || title.with(|t| t.trim().is_empty()))
                on_click=submit
            >
                "Add Content"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title="Add New Content" on_close=on_close footer=footer>
            {target.map(|name| view! {
                <p class="muted">{format!("Adding to {}", name)}</p>
            })}
            <div class="form">
                <div class="form__group">
                    <Label>"Content Title *"</Label>
                    <Input value=title placeholder="Enter content title" />
                </div>
                <div class="form__group">
                    <Label>"Description"</Label>
                    <Textarea value=description placeholder="Brief description of the content" />
                </div>
                <div class="form__group">
                    <Label>"Content Type *"</Label>
                    <div class="type-picker">
                        {ContentType::all()
                            .into_iter()
                            .map(|kind| view! {
                                <button
                                    type="button"
                                    class="type-picker__option"
                                    class:type-picker__option--selected=move || content_type.get() == kind
                                    on:click=move |_| content_type.set(kind)
                                >
                                    {icon(kind.icon_name())}
                                    <span>{kind.display_name()}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Source *"</Label>
                    <div class="source-picker">
                        <label class="source-picker__option">
                            <input
                                type="radio"
                                name="content-source"
                                prop:checked=move || source.get() == ContentSource::Upload
                                on:change=move |_| source.set(ContentSource::Upload)
                            />
                            {icon("upload")}
                            "Upload File"
                        </label>
                        <label class="source-picker__option">
                            <input
                                type="radio"
                                name="content-source"
                                prop:checked=move || source.get() == ContentSource::External
                                on:change=move |_| source.set(ContentSource::External)
                            />
                            {icon("link")}
                            "External Link"
                        </label>
                    </div>
                </div>
                {move || match source.get() {
                    ContentSource::Upload => view! {
                        <div class="form__group">
                            <Label>"Upload File"</Label>
                            <div class="dropzone">
                                {icon("upload")}
                                <p>"Drag and drop or click to upload"</p>
                                <p class="muted">"Max file size: 100MB"</p>
                            </div>
                        </div>
                    }
                    .into_any(),
                    ContentSource::External => view! {
                        <div class="form__group">
                            <Label>"External URL"</Label>
                            <Input value=url placeholder="https://example.com/content" />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </Modal>
    }
}
