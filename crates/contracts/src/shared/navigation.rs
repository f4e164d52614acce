//! Sidebar menus as tagged entries: a `Section` starts a new group, every
//! `Item` belongs to the group opened by the last section.

use super::routes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Section(&'static str),
    Item(NavItem),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub section: Option<&'static str>,
    pub items: Vec<NavItem>,
}

/// How a menu decides which item is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveMatch {
    Exact,
    Prefix,
}

impl ActiveMatch {
    pub fn is_active(&self, item_path: &str, current: &str) -> bool {
        match self {
            ActiveMatch::Exact => item_path == current,
            ActiveMatch::Prefix => current.starts_with(item_path),
        }
    }
}

const fn item(label: &'static str, icon: &'static str, path: &'static str) -> NavEntry {
    NavEntry::Item(NavItem { label, icon, path })
}

/// Folds the flat entry list into groups. Groups without items are dropped.
pub fn group_nav_entries(entries: &[NavEntry]) -> Vec<NavGroup> {
    let mut groups = Vec::new();
    let mut current = NavGroup {
        section: None,
        items: Vec::new(),
    };

    for entry in entries {
        match entry {
            NavEntry::Section(label) => {
                let finished = std::mem::replace(
                    &mut current,
                    NavGroup {
                        section: Some(*label),
                        items: Vec::new(),
                    },
                );
                if !finished.items.is_empty() {
                    groups.push(finished);
                }
            }
            NavEntry::Item(nav_item) => current.items.push(nav_item.clone()),
        }
    }
    if !current.items.is_empty() {
        groups.push(current);
    }
    groups
}

pub fn admin_menu() -> Vec<NavEntry> {
    vec![
        item("Country", "globe", "/admin/country"),
        item("Content Master", "help-circle", "/admin/content-master"),
        item("Group Master", "users", "/admin/group-master"),
        NavEntry::Section("USER MANAGEMENT"),
        item("Users", "users", "/admin/users"),
        item("Trainers", "user-check", "/admin/trainers"),
        item("Role Permissions", "shield", routes::ROLE_PERMISSIONS),
        item("User Permissions", "user-cog", routes::USER_PERMISSIONS),
        NavEntry::Section("CONTENT MANAGEMENT"),
        item("Content Hub", "book-open", routes::CONTENT_HUB),
        item("Certificate Templates", "award", routes::CERTIFICATE_TEMPLATES),
        item("Assessment Engine", "clipboard-list", "/admin/assessment-engine"),
        NavEntry::Section("ASSESSMENT"),
        item("Assessment Dashboard", "layout-grid", "/admin/assessment-dashboard"),
        item("Assessments", "help-circle", "/admin/assessments"),
        item("Question Bank", "help-circle", "/admin/question-bank"),
        item("Bulk Upload", "upload", "/admin/bulk-upload"),
        item("Assessment Reports", "bar-chart", "/admin/assessment-reports"),
    ]
}

pub fn trainer_menu() -> Vec<NavEntry> {
    vec![
        NavEntry::Section("MAIN"),
        item("Dashboard", "layout-dashboard", routes::TRAINER_HOME),
        NavEntry::Section("TRAINING MANAGEMENT"),
        item("My Group", "users", "/trainer/groups"),
        item("Assigned Users", "user-check", "/trainer/users"),
        NavEntry::Section("COURSES"),
        item("Course Library", "book-open", "/trainer/courses"),
        NavEntry::Section("EVENTS & ATTENDANCE"),
        item("Events & Calendar", "calendar", "/trainer/events"),
        item("Attendance Tracking", "clipboard-check", "/trainer/attendance"),
        NavEntry::Section("ASSESSMENTS"),
        item("Assessments", "file-text", "/trainer/assessments"),
        item("Assessment Reports", "bar-chart", "/trainer/assessment-reports"),
        NavEntry::Section("CONTENT"),
        item("Content Hub", "folder-open", "/trainer/content-hub"),
        NavEntry::Section("FEEDBACK & CERTIFICATES"),
        item("Feedback", "message-square", "/trainer/feedback"),
        item("Certificates", "award", "/trainer/certificates"),
        NavEntry::Section("SETTINGS"),
        item("Settings", "settings", "/trainer/settings"),
    ]
}

pub fn user_menu() -> Vec<NavEntry> {
    vec![
        NavEntry::Section("MAIN"),
        item("Dashboard", "layout-dashboard", routes::USER_HOME),
        NavEntry::Section("LEARNING"),
        item("My Trainings", "book-open", "/user/trainings"),
        item("Calendar", "calendar", "/user/calendar"),
        item("Library", "library", "/user/library"),
        NavEntry::Section("PROGRESS"),
        item("Assessments", "file-text", "/user/assessments"),
        item("Certificates", "award", "/user/certificates"),
        NavEntry::Section("ACCOUNT"),
        item("Profile", "user", "/user/profile"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_before_first_section_form_an_unlabelled_group() {
        let groups = group_nav_entries(&admin_menu());
        assert_eq!(groups[0].section, None);
        assert_eq!(groups[0].items.len(), 3);
        assert_eq!(groups[1].section, Some("USER MANAGEMENT"));
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn empty_sections_are_dropped() {
        let entries = vec![
            NavEntry::Section("EMPTY"),
            NavEntry::Section("MAIN"),
            item("Dashboard", "layout-dashboard", "/trainer"),
            NavEntry::Section("TRAILING"),
        ];
        let groups = group_nav_entries(&entries);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section, Some("MAIN"));
    }

    #[test]
    fn trainer_menu_keeps_every_item() {
        let groups = group_nav_entries(&trainer_menu());
        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, 12);
        assert!(groups.iter().all(|g| g.section.is_some()));
    }

    #[test]
    fn active_matching() {
        assert!(ActiveMatch::Prefix.is_active("/content-hub", "/content-hub/bt/categories"));
        assert!(!ActiveMatch::Exact.is_active("/trainer", "/trainer/groups"));
        assert!(ActiveMatch::Exact.is_active("/trainer", "/trainer"));
    }
}
