//! Printable certificate with optional inline editing of its text blocks

use contracts::domain::certificates::{CertificateContent, CertificateField};
use leptos::prelude::*;

pub type FieldChange = Callback<(CertificateField, String)>;

const COURSE_PLACEHOLDER: &str = "Course / Assessment Name";

/// Dot grid fading out from one corner
fn corner_pattern(class: &'static str) -> impl IntoView {
    let dots = (0..20u32)
        .flat_map(|i| (0..20u32).map(move |j| (i, j)))
        .filter_map(|(i, j)| {
            let r = 3.0 - f64::from(i + j) * 0.15;
            (r > 0.0).then(|| {
                let (cx, cy) = ((10 + i * 10).to_string(), (10 + j * 10).to_string());
                view! { <circle cx=cx cy=cy r=format!("{:.2}", r) /> }
            })
        })
        .collect_view();

    view! {
        <div class=class>
            <svg viewBox="0 0 200 200" preserveAspectRatio="none">
                {dots}
            </svg>
        </div>
    }
}

#[component]
fn EditableText(
    field: CertificateField,
    content: Signal<CertificateContent>,
    on_change: Option<FieldChange>,
    class: &'static str,
) -> impl IntoView {
    let value = move || content.with(|c| c.get(field).to_string());

    match on_change {
        Some(change) if field.multiline() => view! {
            <textarea
                class=format!("{} cert__editable", class)
                rows=2
                prop:value=value
                on:input=move |ev| change.run((field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        Some(change) => view! {
            <input
                type="text"
                class=format!("{} cert__editable", class)
                prop:value=value
                on:input=move |ev| change.run((field, event_target_value(&ev)))
            />
        }
        .into_any(),
        None => view! { <span class=class>{value}</span> }.into_any(),
    }
}

/// Auto-filled values are shown as samples; `(Auto)` hints appear while editing
#[component]
pub fn CertificateLayout(
    #[prop(into)] content: Signal<CertificateContent>,
    #[prop(into)] course_name: Signal<String>,
    /// Inline editing is enabled when set
    #[prop(optional)]
    on_change: Option<FieldChange>,
) -> impl IntoView {
    let editing = on_change.is_some();
    let hint = move |text: &'static str| editing.then(|| view! { <span class="cert__hint">{text}</span> });

    view! {
        <div class="cert" class:cert--editing=editing>
            {corner_pattern("cert__pattern cert__pattern--top")}
            {corner_pattern("cert__pattern cert__pattern--bottom")}

            <div class="cert__org">
                <EditableText
                    field=CertificateField::OrganizationName
                    content=content
                    on_change=on_change
                    class="cert__org-name"
                />
            </div>

            <div class="cert__body">
                <EditableText field=CertificateField::Title content=content on_change=on_change class="cert__title" />
                <EditableText field=CertificateField::Subtitle content=content on_change=on_change class="cert__subtitle" />

                <div class="cert__candidate">
                    <span class="cert__candidate-name">"Mr. Name Surname"</span>
                    {hint("(Auto-filled with user name)")}
                </div>

                <EditableText
                    field=CertificateField::RecognitionText
                    content=content
                    on_change=on_change
                    class="cert__recognition"
                />

                <div class="cert__banner">
                    <h2>
                        {move || {
                            let name = course_name.get();
                            if name.is_empty() { COURSE_PLACEHOLDER.to_string() } else { name }
                        }}
                    </h2>
                    {hint("(Selected from dropdown above)")}
                </div>

                <EditableText
                    field=CertificateField::DescriptionText
                    content=content
                    on_change=on_change
                    class="cert__description"
                />

                <div class="cert__stats">
                    <div class="cert__stat">
                        <span class="cert__stat-label">"Score"</span>
                        <span class="cert__stat-value">"80/100"</span>
                        {hint("(Auto-filled)")}
                    </div>
                    <div class="cert__stat">
                        <span class="cert__stat-label">"Result"</span>
                        <span class="cert__stat-value">"Pass"</span>
                        {hint("(Auto-filled)")}
                    </div>
                    <div class="cert__stat">
                        <span class="cert__stat-label">"No of Attempts"</span>
                        <span class="cert__stat-value">"2"</span>
                        {hint("(Auto-filled)")}
                    </div>
                </div>

                <div class="cert__footer">
                    <EditableText
                        field=CertificateField::Hashtag
                        content=content
                        on_change=on_change
                        class="cert__hashtag"
                    />
                    <div class="cert__meta">
                        <div><strong>"Date:"</strong>" 27 Nov 2025 "{hint("(Auto)")}</div>
                        <div><strong>"Duration:"</strong>" 1 Hrs 30 Mins "{hint("(Auto)")}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
