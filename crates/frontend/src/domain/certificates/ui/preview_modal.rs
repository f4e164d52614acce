use super::layout::CertificateLayout;
use crate::shared::modal::Modal;
use contracts::domain::certificates::CertificateContent;
use leptos::prelude::*;

#[component]
pub fn CertificatePreviewModal(
    #[prop(into)] content: Signal<CertificateContent>,
    #[prop(into)] course_name: Signal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Certificate Preview" on_close=on_close size="lg">
            <div class="cert-preview">
                <CertificateLayout content=content course_name=course_name />
            </div>
        </Modal>
    }
}
