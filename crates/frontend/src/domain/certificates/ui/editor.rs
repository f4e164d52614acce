//! Create / edit page of a certificate template

use super::layout::CertificateLayout;
use super::preview_modal::CertificatePreviewModal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::certificates::{
    certificate_by_id, grouped_course_options, CertificateField, CertificateForm, CourseOption,
};
use contracts::shared::routes;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorMode {
    Create,
    Edit,
}

impl EditorMode {
    fn title(&self) -> &'static str {
        match self {
            EditorMode::Create => "Create Certificate Template",
            EditorMode::Edit => "Edit Certificate Template",
        }
    }

    fn subtitle(&self) -> &'static str {
        match self {
            EditorMode::Create => "Design a new certificate template for courses or assessments",
            EditorMode::Edit => "Modify the certificate template content",
        }
    }

    fn save_label(&self) -> &'static str {
        match self {
            EditorMode::Create => "Save Template",
            EditorMode::Edit => "Update Template",
        }
    }

    fn saved_message(&self) -> &'static str {
        match self {
            EditorMode::Create => "Certificate template created successfully",
            EditorMode::Edit => "Certificate template updated successfully",
        }
    }
}

fn option_group(label: &'static str, options: Vec<CourseOption>, selected: String) -> impl IntoView {
    view! {
        <optgroup label=label>
            {options
                .into_iter()
                .map(|o| {
                    let is_selected = o.id == selected;
                    view! { <option value=o.id selected=is_selected>{o.name}</option> }
                })
                .collect_view()}
        </optgroup>
    }
}

#[component]
fn TemplateEditor(mode: EditorMode, form: CertificateForm) -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    let name = RwSignal::new(form.name.clone());
    let selected_id = form.linked.as_ref().map(|o| o.id.clone()).unwrap_or_default();
    let form = RwSignal::new(form);
    let show_preview = RwSignal::new(false);

    let grouped = grouped_course_options();
    let content = Signal::derive(move || form.with(|f| f.content.clone()));
    let course_name = Signal::derive(move || form.with(|f| f.course_name_or("").to_string()));
    let preview_course = Signal::derive(move || form.with(|f| f.course_name_or("Course Name").to_string()));

    let on_change = Callback::new(move |(field, value): (CertificateField, String)| {
        form.update(|f| f.set_field(field, value));
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let mut current = form.get_untracked();
        current.name = name.get_untracked();
        match current.validate() {
            Ok(linked) => {
                log::info!(
                    "certificate template '{}' saved for {} {}",
                    current.name.trim(),
                    linked.kind.code(),
                    linked.id
                );
                toast.success(mode.saved_message());
                navigate(routes::CERTIFICATE_TEMPLATES, Default::default());
            }
            Err(e) => toast.error(e.message()),
        }
    };

    view! {
        <PageFrame page_id="certificates--editor" category=PAGE_CAT_DETAIL>
            <div class="editor__top">
                <button
                    class="level-header__back"
                    title="Back"
                    on:click=move |_| {
                        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                            let _ = history.back();
                        }
                    }
                >
                    {icon("arrow-left")}
                </button>
                <PageHeader title=mode.title() subtitle=mode.subtitle() />
            </div>

            <div class="form form--narrow">
                <div class="form__group">
                    <Label>"Template Name *"</Label>
                    <Input value=name placeholder="Enter template name" />
                </div>
                <div class="form__group">
                    <Label>"Link to Course / Assessment *"</Label>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let id = event_target_value(&ev);
                            form.update(|f| f.select_linked(&id));
                        }
                    >
                        <option value="" selected=selected_id.is_empty()>"Select a course or assessment"</option>
                        {option_group("Courses", grouped.courses, selected_id.clone())}
                        {option_group("Assessments", grouped.assessments, selected_id.clone())}
                    </select>
                </div>
            </div>

            <section class="editor__canvas">
                <div class="editor__canvas-header">
                    <h2>"Certificate Layout Editor"</h2>
                    <p class="muted">"Edit text content directly on the certificate"</p>
                </div>
                <div class="editor__canvas-frame">
                    <CertificateLayout content=content course_name=course_name on_change=on_change />
                </div>
            </section>

            <div class="editor__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_preview.set(true)>
                    {icon("eye")}
                    " Preview"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {icon("save")}
                    {format!(" {}", mode.save_label())}
                </Button>
            </div>

            <Show when=move || show_preview.get()>
                <CertificatePreviewModal
                    content=content
                    course_name=preview_course
                    on_close=Callback::new(move |_| show_preview.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[component]
pub fn CertificateTemplateCreatePage() -> impl IntoView {
    view! { <TemplateEditor mode=EditorMode::Create form=CertificateForm::new() /> }
}

/// Unknown ids bounce back to the list with an error toast
#[component]
pub fn CertificateTemplateEditPage() -> impl IntoView {
    let params = use_params_map();
    let toast = use_toast();
    let template_id = Memo::new(move |_| params.read().get("template_id").unwrap_or_default());

    move || {
        let id = template_id.get();
        match certificate_by_id(&id) {
            Some(template) => view! {
                <TemplateEditor mode=EditorMode::Edit form=CertificateForm::from_template(template) />
            }
            .into_any(),
            None => {
                log::warn!("certificate template {} not found", id);
                toast.error("Certificate template not found");
                view! { <Redirect path=routes::CERTIFICATE_TEMPLATES /> }.into_any()
            }
        }
    }
}
