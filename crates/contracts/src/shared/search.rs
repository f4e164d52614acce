//! Helpers for the client-side list filters

pub const ALL: &str = "all";

/// Case-insensitive substring match against any of `fields`. Empty query
/// matches everything.
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// `"all"` (or empty) matches anything, otherwise exact equality
pub fn matches_option(selected: &str, value: &str) -> bool {
    selected.is_empty() || selected == ALL || selected == value
}

/// Distinct values in first-seen order, for building filter dropdowns
pub fn unique_values<'a, T, F>(items: &'a [T], f: F) -> Vec<String>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let value = f(item);
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search("SMITH", &["John Smith", "john@x"]));
        assert!(matches_search("", &["anything"]));
        assert!(!matches_search("zed", &["John Smith"]));
    }

    #[test]
    fn all_matches_every_option() {
        assert!(matches_option(ALL, "active"));
        assert!(matches_option("active", "active"));
        assert!(!matches_option("inactive", "active"));
    }

    #[test]
    fn unique_values_keep_first_seen_order() {
        let items = vec!["b", "a", "b", "c", "a"];
        assert_eq!(unique_values(&items, |s| *s), vec!["b", "a", "c"]);
    }
}
