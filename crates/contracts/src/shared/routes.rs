//! Path builders shared by breadcrumbs, cards and navigation.
//! The router in the frontend declares the matching patterns.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const CONTENT_HUB: &str = "/content-hub";
pub const CONTENT_EXPLORER: &str = "/content-hub/explorer";
pub const CERTIFICATE_TEMPLATES: &str = "/admin/certificate-templates";
pub const CERTIFICATE_TEMPLATE_CREATE: &str = "/admin/certificate-templates/create";
pub const ROLE_PERMISSIONS: &str = "/admin/role-permissions";
pub const USER_PERMISSIONS: &str = "/admin/user-permissions";
pub const TRAINER_HOME: &str = "/trainer";
pub const USER_HOME: &str = "/user";

pub fn user_page(page: &str) -> String {
    format!("{}/{}", USER_HOME, page)
}

/// Learner calendar opened on a day, `?date=YYYY-MM-DD`
pub fn user_calendar_on(date: chrono::NaiveDate) -> String {
    format!("{}?date={}", user_page("calendar"), date.format("%Y-%m-%d"))
}

pub fn offer_type_categories(offer_type_id: &str) -> String {
    format!("/content-hub/{}/categories", offer_type_id)
}

pub fn category_sub_categories(category_id: &str) -> String {
    format!("/content-hub/categories/{}/sub-categories", category_id)
}

pub fn sub_category_modules(sub_category_id: &str) -> String {
    format!("/content-hub/sub-categories/{}/modules", sub_category_id)
}

pub fn module_lessons(module_id: &str) -> String {
    format!("/content-hub/modules/{}/lessons", module_id)
}

pub fn certificate_templates() -> String {
    CERTIFICATE_TEMPLATES.to_string()
}

pub fn certificate_template_edit(template_id: &str) -> String {
    format!("/admin/certificate-templates/{}/edit", template_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_paths() {
        assert_eq!(offer_type_categories("bt"), "/content-hub/bt/categories");
        assert_eq!(
            category_sub_categories("cs"),
            "/content-hub/categories/cs/sub-categories"
        );
        assert_eq!(
            sub_category_modules("ds"),
            "/content-hub/sub-categories/ds/modules"
        );
        assert_eq!(module_lessons("m1"), "/content-hub/modules/m1/lessons");
        assert_eq!(
            certificate_template_edit("cert-1"),
            "/admin/certificate-templates/cert-1/edit"
        );
    }

    #[test]
    fn calendar_deep_link() {
        let day = chrono::NaiveDate::from_ymd_opt(2026, 1, 25).unwrap();
        assert_eq!(user_calendar_on(day), "/user/calendar?date=2026-01-25");
    }
}
