use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::learner::fixtures;
use contracts::domain::learner::progress::active_certificates;
use contracts::domain::learner::{CertificateRequirements, EarnedCertificate, EarnedStatus, PendingCertificate};
use leptos::prelude::*;
use thaw::*;

/// Requirement rows in display order
fn requirement_rows(req: CertificateRequirements) -> [(&'static str, bool); 3] {
    [
        ("Complete all modules", req.modules_completed),
        ("Pass final assessment", req.assessment_passed),
        ("Complete 15-day waiting period", req.waiting_period),
    ]
}

#[component]
fn ActiveCertificateCard(cert: EarnedCertificate) -> impl IntoView {
    let toast = use_toast();
    let id = cert.id.clone();
    let facts = [
        ("Certificate ID", cert.id.clone()),
        ("Training", cert.training_name.clone()),
        ("Modules Completed", cert.modules_completed.to_string()),
        ("Issued", cert.issued_date.clone()),
        ("Expires", cert.expiry_date.clone()),
    ];

    view! {
        <div class="earned-card">
            <div class="earned-card__head">
                <span class="earned-card__icon">{icon("award")}</span>
                <div>
                    <h3>{cert.name.clone()}</h3>
                    <p class="text-muted">{cert.course.clone()}</p>
                </div>
                <StatusPill variant="status-pill--success">"Active"</StatusPill>
            </div>
            <dl class="earned-card__facts">
                {facts
                    .into_iter()
                    .map(|(k, v)| view! { <dt class="text-muted">{k}</dt><dd>{v}</dd> })
                    .collect_view()}
            </dl>
            <Button
                appearance=ButtonAppearance::Primary
                class="earned-card__download"
                on_click=move |_| {
                    log::info!("certificate {} download requested", id);
                    toast.success("Downloading certificate...");
                }
            >
                {icon("download")}
                " Download Certificate"
            </Button>
        </div>
    }
}

#[component]
fn PendingCertificateCard(cert: PendingCertificate) -> impl IntoView {
    view! {
        <div class="pending-card">
            <div class="pending-card__head">
                <div>
                    <h3>{cert.name.clone()}</h3>
                    <p class="text-muted">{cert.course.clone()}</p>
                </div>
                <StatusPill variant="status-pill--warning">{format!("{}% Complete", cert.progress)}</StatusPill>
            </div>
            <ul class="requirement-list">
                {requirement_rows(cert.requirements)
                    .into_iter()
                    .map(|(label, done)| {
                        let class = if done { "requirement requirement--done" } else { "requirement" };
                        view! { <li class=class>{icon("check-circle")}" "{label}</li> }
                    })
                    .collect_view()}
            </ul>
            <div class="pending-card__footer">
                <span class="text-muted">{icon("calendar")}" Estimated completion"</span>
                <strong>{cert.estimated_completion.clone()}</strong>
            </div>
        </div>
    }
}

#[component]
pub fn LearnerCertificatesPage() -> impl IntoView {
    let toast = use_toast();
    let earned = fixtures::earned_certificates();
    let pending = fixtures::pending_certificates();

    let active = active_certificates(&earned).into_iter().cloned().collect::<Vec<_>>();
    let expired = earned
        .iter()
        .filter(|c| c.status == EarnedStatus::Expired)
        .cloned()
        .collect::<Vec<_>>();

    view! {
        <PageFrame page_id="learner--certificates" category=PAGE_CAT_LIST>
            <PageHeader title="My Certificates" subtitle="View and download your earned certificates" />

            <div class="stat-grid">
                <StatCard label="Active Certificates" icon_name="award" tone=StatTone::Success value=active.len().to_string() />
                <StatCard label="In Progress" icon_name="clock" tone=StatTone::Warning value=pending.len().to_string() />
                <StatCard label="Expired" icon_name="file-text" tone=StatTone::Error value=expired.len().to_string() />
                <StatCard label="Total Earned" icon_name="check-circle" tone=StatTone::Info value=earned.len().to_string() />
            </div>

            <Card class="notice notice--info">
                <h4>{icon("award")}" Certificate Requirements"</h4>
                <ul class="notice-list">
                    <li>"Complete all course modules"</li>
                    <li>"Pass the final assessment"</li>
                    <li>"Wait 15 days after training completion (gap period)"</li>
                </ul>
            </Card>

            <Card class="chart-card">
                <h3>{icon("award")}" Active Certificates"</h3>
                <div class="card-grid card-grid--2">
                    {active
                        .into_iter()
                        .map(|c| view! { <ActiveCertificateCard cert=c /> })
                        .collect_view()}
                </div>
            </Card>

            <Card class="chart-card">
                <h3>{icon("clock")}" In Progress"</h3>
                {pending
                    .into_iter()
                    .map(|c| view! { <PendingCertificateCard cert=c /> })
                    .collect_view()}
            </Card>

            {(!expired.is_empty()).then(|| view! {
                <Card class="chart-card">
                    <h3>{icon("file-text")}" Expired Certificates"</h3>
                    {expired
                        .into_iter()
                        .map(|c| view! {
                            <div class="expired-row">
                                <span class="expired-row__icon">{icon("award")}</span>
                                <div class="expired-row__body">
                                    <h4>{c.name.clone()}</h4>
                                    <p class="text-muted">{format!("Expired on {}", c.expiry_date)}</p>
                                </div>
                                <StatusPill variant="status-pill--error">"Expired"</StatusPill>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| toast.success("Downloading certificate...")
                                >
                                    {icon("download")}
                                    " Download"
                                </Button>
                            </div>
                        })
                        .collect_view()}
                </Card>
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_rows_follow_flags() {
        let req = CertificateRequirements {
            modules_completed: true,
            assessment_passed: false,
            waiting_period: false,
        };
        let rows = requirement_rows(req);
        assert_eq!(rows[0], ("Complete all modules", true));
        assert!(!rows[2].1);
        assert_eq!(req.met(), 1);
    }
}
