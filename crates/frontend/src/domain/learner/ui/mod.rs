//! Learner portal pages

pub mod assessments;
pub mod calendar;
pub mod certificates;
pub mod dashboard;
pub mod library;
pub mod profile;
pub mod trainings;

/// "In Progress (2)"
pub(crate) fn tab_label(label: &str, count: usize) -> String {
    format!("{} ({})", label, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_label_carries_count() {
        assert_eq!(tab_label("All", 6), "All (6)");
    }
}
