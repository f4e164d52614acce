//! Page category constants.
//!
//! Every routed page declares an HTML `id` of the form `{area}--{page}`
//! (e.g. `"content_hub--lessons"`) and a `data-page-category` taken from
//! the constants below.

/// Table of records with filters
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// KPI cards and charts
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Drill-down through the content hierarchy
pub const PAGE_CAT_BROWSE: &str = "browse";

/// Sign-in, landing and error pages
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_BROWSE,
    PAGE_CAT_SYSTEM,
];

/// Checks the `{area}--{page}` format
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((area, page)) => !area.is_empty() && !page.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("content_hub--lessons"));
        assert!(!is_valid_page_id("content_hub"));
        assert!(!is_valid_page_id("--lessons"));
        assert!(is_known_category(PAGE_CAT_BROWSE));
        assert!(!is_known_category("legacy"));
    }
}
