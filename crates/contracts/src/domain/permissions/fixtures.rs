use once_cell::sync::Lazy;

use super::aggregate::{Permission, PermissionModule};
use super::user_overrides::{ModuleGrant, UserProfile};

use super::aggregate::Permission::{Create, Delete, Edit, View};

static MODULES: Lazy<Vec<PermissionModule>> = Lazy::new(|| {
    let m = |id, name, description, icon, permissions: &[Permission]| PermissionModule {
        id,
        name,
        description,
        icon,
        permissions: permissions.to_vec(),
    };
    let crud = &[View, Create, Edit, Delete];
    vec![
        m("dashboard", "Dashboard", "Access to dashboard overview and analytics.", "layout-dashboard", &[View]),
        m("category", "Category Management", "Manage categories and organize content structure.", "folder-open", crud),
        m("content-hub", "Content Hub", "Upload and manage training content and materials.", "book-open", crud),
        m("users", "User Management", "Manage user accounts, roles, and profiles.", "users", crud),
        m("events", "Events & Calendar", "Schedule and manage training events.", "calendar", crud),
        m("assessments", "Assessments", "Create and manage quizzes and assessments.", "file-text", crud),
        m("reports", "Reports & Analytics", "View and export performance reports.", "bar-chart", crud),
        m("attendance", "Attendance Tracking", "Track and manage attendance records.", "clipboard-check", &[View, Create, Edit]),
        m("feedback", "Feedback", "Manage feedback forms and responses.", "message-square", crud),
        m("certificates", "Certificates", "Create and issue completion certificates.", "award", crud),
        m("settings", "Settings", "Manage system settings and configurations.", "settings", &[View, Edit]),
    ]
});

pub fn permission_modules() -> &'static [PermissionModule] {
    &MODULES
}

pub fn permission_module(id: &str) -> Option<&'static PermissionModule> {
    MODULES.iter().find(|m| m.id == id)
}

/// Built-in role grants, keyed by module id. Unknown roles get nothing.
pub fn default_grants(role: &str) -> Vec<(&'static str, Vec<Permission>)> {
    match role {
        "admin" => MODULES
            .iter()
            .map(|m| (m.id, m.permissions.clone()))
            .collect(),
        "trainer" => vec![
            ("dashboard", vec![View]),
            ("content-hub", vec![View]),
            ("users", vec![View]),
            ("events", vec![View, Create, Edit]),
            ("assessments", vec![View, Create, Edit]),
            ("reports", vec![View]),
            ("attendance", vec![View, Create, Edit]),
            ("feedback", vec![View, Create]),
            ("certificates", vec![View]),
            ("category", vec![View]),
            ("settings", vec![View]),
        ],
        "user" => vec![
            ("dashboard", vec![View]),
            ("content-hub", vec![View]),
            ("events", vec![View]),
            ("assessments", vec![View]),
            ("certificates", vec![View]),
            ("feedback", vec![View, Create]),
        ],
        _ => Vec::new(),
    }
}

pub fn demo_user() -> UserProfile {
    UserProfile {
        name: "Sai Kumar".into(),
        email: "sai.kumar@example.com".into(),
        role: "Trainer".into(),
        user_id: "USR-00421".into(),
    }
}

/// What the demo user's role grants per module, and what could be added
pub fn demo_user_grants() -> Vec<ModuleGrant> {
    let g = |module: &str, inherited: &[Permission], available: &[Permission]| ModuleGrant {
        module: module.into(),
        inherited: inherited.to_vec(),
        available: available.to_vec(),
    };
    let crud = &[View, Create, Edit, Delete];
    vec![
        g("Dashboard", &[View], &[View]),
        g("Category Management", &[View, Create], crud),
        g("Content Hub", &[View], crud),
        g("User Management", &[View], crud),
        g("Events & Calendar", &[View, Create, Edit], crud),
        g("Assessments", &[View, Create, Edit], crud),
        g("Reports", &[View], crud),
        g("Attendance", &[View, Create, Edit], &[View, Create, Edit]),
        g("Feedback", &[View, Create], crud),
        g("Certificates", &[View], crud),
    ]
}
