//! URL table. Patterns mirror the builders in `contracts::shared::routes`.

use crate::domain::certificates::ui::editor::{
    CertificateTemplateCreatePage, CertificateTemplateEditPage,
};
use crate::domain::certificates::ui::list::CertificateTemplatesPage;
use crate::domain::content_hub::ui::categories::CategoriesPage;
use crate::domain::content_hub::ui::explorer::ContentExplorerPage;
use crate::domain::content_hub::ui::landing::ContentHubPage;
use crate::domain::content_hub::ui::lessons::LessonsPage;
use crate::domain::content_hub::ui::modules::ModulesPage;
use crate::domain::content_hub::ui::sub_categories::SubCategoriesPage;
use crate::domain::learner::ui::assessments::LearnerAssessmentsPage;
use crate::domain::learner::ui::calendar::LearnerCalendarPage;
use crate::domain::learner::ui::certificates::LearnerCertificatesPage;
use crate::domain::learner::ui::dashboard::LearnerDashboardPage;
use crate::domain::learner::ui::library::LearnerLibraryPage;
use crate::domain::learner::ui::profile::LearnerProfilePage;
use crate::domain::learner::ui::trainings::LearnerTrainingsPage;
use crate::domain::permissions::ui::roles::RolePermissionsPage;
use crate::domain::permissions::ui::users::UserPermissionsPage;
use crate::domain::trainer::ui::assessments::TrainerAssessmentsPage;
use crate::domain::trainer::ui::attendance::TrainerAttendancePage;
use crate::domain::trainer::ui::certificates::TrainerCertificatesPage;
use crate::domain::trainer::ui::content_hub::TrainerContentHubPage;
use crate::domain::trainer::ui::courses::TrainerCoursesPage;
use crate::domain::trainer::ui::dashboard::TrainerDashboardPage;
use crate::domain::trainer::ui::events::TrainerEventsPage;
use crate::domain::trainer::ui::feedback::TrainerFeedbackPage;
use crate::domain::trainer::ui::groups::TrainerGroupsPage;
use crate::domain::trainer::ui::reports::TrainerReportsPage;
use crate::domain::trainer::ui::settings::TrainerSettingsPage;
use crate::domain::trainer::ui::users::TrainerUsersPage;
use crate::layout::admin::AdminLayout;
use crate::layout::learner::LearnerLayout;
use crate::layout::trainer::TrainerLayout;
use crate::system::pages::index::IndexPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=IndexPage />
            <Route path=path!("/login") view=LoginPage />

            <ParentRoute path=path!("/content-hub") view=AdminLayout>
                <Route path=path!("") view=ContentHubPage />
                <Route path=path!("explorer") view=ContentExplorerPage />
                <Route path=path!(":offer_id/categories") view=CategoriesPage />
                <Route path=path!("categories/:category_id/sub-categories") view=SubCategoriesPage />
                <Route path=path!("sub-categories/:sub_category_id/modules") view=ModulesPage />
                <Route path=path!("modules/:module_id/lessons") view=LessonsPage />
            </ParentRoute>

            <ParentRoute path=path!("/admin") view=AdminLayout>
                <Route path=path!("certificate-templates") view=CertificateTemplatesPage />
                <Route path=path!("certificate-templates/create") view=CertificateTemplateCreatePage />
                <Route path=path!("certificate-templates/:template_id/edit") view=CertificateTemplateEditPage />
                <Route path=path!("role-permissions") view=RolePermissionsPage />
                <Route path=path!("user-permissions") view=UserPermissionsPage />
            </ParentRoute>

            <ParentRoute path=path!("/trainer") view=TrainerLayout>
                <Route path=path!("") view=TrainerDashboardPage />
                <Route path=path!("groups") view=TrainerGroupsPage />
                <Route path=path!("users") view=TrainerUsersPage />
                <Route path=path!("courses") view=TrainerCoursesPage />
                <Route path=path!("events") view=TrainerEventsPage />
                <Route path=path!("attendance") view=TrainerAttendancePage />
                <Route path=path!("assessments") view=TrainerAssessmentsPage />
                <Route path=path!("assessment-reports") view=TrainerReportsPage />
                <Route path=path!("content-hub") view=TrainerContentHubPage />
                <Route path=path!("feedback") view=TrainerFeedbackPage />
                <Route path=path!("certificates") view=TrainerCertificatesPage />
                <Route path=path!("settings") view=TrainerSettingsPage />
            </ParentRoute>

            <ParentRoute path=path!("/user") view=LearnerLayout>
                <Route path=path!("") view=LearnerDashboardPage />
                <Route path=path!("trainings") view=LearnerTrainingsPage />
                <Route path=path!("calendar") view=LearnerCalendarPage />
                <Route path=path!("library") view=LearnerLibraryPage />
                <Route path=path!("assessments") view=LearnerAssessmentsPage />
                <Route path=path!("certificates") view=LearnerCertificatesPage />
                <Route path=path!("profile") view=LearnerProfilePage />
            </ParentRoute>
        </Routes>
    }
}
