//! Search/select filters and counters of the trainer list pages.
//! A select value of `"all"` matches everything.

use super::aggregate::*;
use crate::shared::search::{matches_option, matches_search, unique_values, ALL};

fn default_all() -> String {
    ALL.to_string()
}

// ============================================================================
// Learners
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerFilter {
    pub search: String,
    pub group: String,
    pub status: String,
}

impl Default for LearnerFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            group: default_all(),
            status: default_all(),
        }
    }
}

impl LearnerFilter {
    pub fn matches(&self, l: &AssignedLearner) -> bool {
        matches_search(&self.search, &[l.name.as_str(), l.email.as_str()])
            && matches_option(&self.group, &l.group)
            && matches_option(&self.status, l.status.code())
    }

    pub fn apply<'a>(&self, items: &'a [AssignedLearner]) -> Vec<&'a AssignedLearner> {
        items.iter().filter(|l| self.matches(l)).collect()
    }
}

pub fn learner_groups(items: &[AssignedLearner]) -> Vec<String> {
    unique_values(items, |l| l.group.as_str())
}

/// Sets the status of one learner; returns false if the id is unknown
pub fn set_learner_status(items: &mut [AssignedLearner], id: &str, status: LearnerStatus) -> bool {
    match items.iter_mut().find(|l| l.id == id) {
        Some(l) => {
            l.status = status;
            true
        }
        None => false,
    }
}

// ============================================================================
// Attendance
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub search: String,
    pub event: String,
    pub status: String,
}

impl Default for AttendanceFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            event: default_all(),
            status: default_all(),
        }
    }
}

impl AttendanceFilter {
    pub fn apply<'a>(&self, items: &'a [AttendanceRecord]) -> Vec<&'a AttendanceRecord> {
        items
            .iter()
            .filter(|r| {
                matches_search(&self.search, &[r.user_name.as_str()])
                    && matches_option(&self.event, &r.event_name)
                    && matches_option(&self.status, r.status.code())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub pending: usize,
}

impl AttendanceStats {
    pub fn of(items: &[AttendanceRecord]) -> Self {
        let count = |s: AttendanceStatus| items.iter().filter(|r| r.status == s).count();
        Self {
            total: items.len(),
            present: count(AttendanceStatus::Present),
            absent: count(AttendanceStatus::Absent),
            pending: count(AttendanceStatus::Pending),
        }
    }
}

pub fn attendance_events(items: &[AttendanceRecord]) -> Vec<String> {
    unique_values(items, |r| r.event_name.as_str())
}

pub fn mark_attendance(items: &mut [AttendanceRecord], id: &str, status: AttendanceStatus) -> bool {
    match items.iter_mut().find(|r| r.id == id) {
        Some(r) => {
            r.status = status;
            true
        }
        None => false,
    }
}

// ============================================================================
// Assessment reports
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub search: String,
    pub result: String,
    pub assessment: String,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            result: default_all(),
            assessment: default_all(),
        }
    }
}

impl ReportFilter {
    pub fn apply<'a>(&self, items: &'a [AssessmentReport]) -> Vec<&'a AssessmentReport> {
        items
            .iter()
            .filter(|r| {
                matches_search(&self.search, &[r.user_name.as_str()])
                    && matches_option(&self.result, r.result.code())
                    && matches_option(&self.assessment, &r.assessment_name)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Rounded to the nearest integer, 0 for an empty list
    pub avg_score: u32,
}

impl ReportStats {
    pub fn of(items: &[AssessmentReport]) -> Self {
        let total = items.len();
        let passed = items.iter().filter(|r| r.result == ResultStatus::Pass).count();
        let sum: u32 = items.iter().map(|r| r.score).sum();
        let avg_score = if total == 0 {
            0
        } else {
            (f64::from(sum) / total as f64).round() as u32
        };
        Self {
            total,
            passed,
            failed: total - passed,
            avg_score,
        }
    }
}

pub fn report_assessments(items: &[AssessmentReport]) -> Vec<String> {
    unique_values(items, |r| r.assessment_name.as_str())
}

// ============================================================================
// Feedback
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub search: String,
    pub course: String,
}

impl Default for FeedbackFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            course: default_all(),
        }
    }
}

impl FeedbackFilter {
    pub fn apply<'a>(&self, items: &'a [FeedbackEntry]) -> Vec<&'a FeedbackEntry> {
        items
            .iter()
            .filter(|f| {
                matches_search(&self.search, &[f.user_name.as_str(), f.comments.as_str()])
                    && matches_option(&self.course, &f.course)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackStats {
    pub total: usize,
    pub avg_trainer_rating: f64,
    pub avg_content_rating: f64,
}

impl FeedbackStats {
    pub fn of(items: &[FeedbackEntry]) -> Self {
        let avg = |f: fn(&FeedbackEntry) -> u8| {
            if items.is_empty() {
                0.0
            } else {
                items.iter().map(|e| f64::from(f(e))).sum::<f64>() / items.len() as f64
            }
        };
        Self {
            total: items.len(),
            avg_trainer_rating: avg(|e| e.trainer_rating),
            avg_content_rating: avg(|e| e.content_rating),
        }
    }

    /// One decimal, e.g. "4.4"
    pub fn format_rating(value: f64) -> String {
        format!("{:.1}", value)
    }
}

pub fn feedback_courses(items: &[FeedbackEntry]) -> Vec<String> {
    unique_values(items, |f| f.course.as_str())
}

// ============================================================================
// Issued certificates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCertificateFilter {
    pub search: String,
    pub status: String,
}

impl Default for IssuedCertificateFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: default_all(),
        }
    }
}

impl IssuedCertificateFilter {
    pub fn apply<'a>(&self, items: &'a [IssuedCertificate]) -> Vec<&'a IssuedCertificate> {
        items
            .iter()
            .filter(|c| {
                matches_search(&self.search, &[c.user_name.as_str(), c.certificate_id.as_str()])
                    && matches_option(&self.status, c.status.code())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IssueStats {
    pub total: usize,
    pub issued: usize,
    pub pending: usize,
}

impl IssueStats {
    pub fn of(items: &[IssuedCertificate]) -> Self {
        let issued = items.iter().filter(|c| c.status == IssueStatus::Issued).count();
        Self {
            total: items.len(),
            issued,
            pending: items.len() - issued,
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// Events scheduled on `date` (ISO), or all events when no date is picked
pub fn events_on<'a>(items: &'a [TrainingEvent], date: Option<&str>) -> Vec<&'a TrainingEvent> {
    match date {
        Some(d) => items.iter().filter(|e| e.date == d).collect(),
        None => items.iter().collect(),
    }
}

/// Removes the row with `id` from a page-local list
pub fn remove_by_id<T, F>(items: &mut Vec<T>, id: &str, key: F) -> bool
where
    F: Fn(&T) -> &str,
{
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trainer::fixtures;

    #[test]
    fn learner_search_covers_name_and_email() {
        let learners = fixtures::learners();
        let filter = LearnerFilter {
            search: "SARAH.J".into(),
            ..Default::default()
        };
        let hits = filter.apply(&learners);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Johnson");
    }

    #[test]
    fn learner_select_filters_combine() {
        let learners = fixtures::learners();
        let filter = LearnerFilter {
            search: String::new(),
            group: "Safety Team A".into(),
            status: "active".into(),
        };
        let names: Vec<&str> = filter.apply(&learners).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith"]);
        assert_eq!(learner_groups(&learners).len(), 4);
    }

    #[test]
    fn deactivate_then_reactivate() {
        let mut learners = fixtures::learners();
        assert!(set_learner_status(&mut learners, "1", LearnerStatus::Inactive));
        assert_eq!(learners[0].status, LearnerStatus::Inactive);
        assert!(!set_learner_status(&mut learners, "99", LearnerStatus::Active));
    }

    #[test]
    fn attendance_stats_follow_marking() {
        let mut records = fixtures::attendance();
        assert_eq!(
            AttendanceStats::of(&records),
            AttendanceStats { total: 6, present: 2, absent: 1, pending: 3 }
        );
        mark_attendance(&mut records, "4", AttendanceStatus::Present);
        assert_eq!(AttendanceStats::of(&records).present, 3);
        assert_eq!(attendance_events(&records).len(), 4);
    }

    #[test]
    fn report_stats() {
        let reports = fixtures::reports();
        let stats = ReportStats::of(&reports);
        assert_eq!(stats.passed, 4);
        assert_eq!(stats.failed, 2);
        // (92 + 85 + 68 + 72 + 95 + 88) / 6 = 83.33
        assert_eq!(stats.avg_score, 83);
        assert_eq!(ReportStats::of(&[]).avg_score, 0);

        let failed = ReportFilter {
            result: "fail".into(),
            ..Default::default()
        };
        assert_eq!(failed.apply(&reports).len(), 2);
    }

    #[test]
    fn feedback_searches_comments() {
        let feedback = fixtures::feedback();
        let filter = FeedbackFilter {
            search: "pace".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&feedback)[0].user_name, "Emily Brown");

        let stats = FeedbackStats::of(&feedback);
        assert_eq!(FeedbackStats::format_rating(stats.avg_trainer_rating), "4.4");
        assert_eq!(FeedbackStats::format_rating(stats.avg_content_rating), "4.6");
    }

    #[test]
    fn certificate_search_by_id() {
        let certs = fixtures::issued_certificates();
        let filter = IssuedCertificateFilter {
            search: "cert-2025-004".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&certs).len(), 1);
        assert_eq!(IssueStats::of(&certs), IssueStats { total: 5, issued: 4, pending: 1 });
    }

    #[test]
    fn events_by_date() {
        let events = fixtures::events();
        assert_eq!(events_on(&events, Some("2025-01-26")).len(), 1);
        assert!(events_on(&events, Some("2030-01-01")).is_empty());
        assert_eq!(events_on(&events, None).len(), 4);
    }

    #[test]
    fn remove_rows() {
        let mut groups = fixtures::groups();
        assert!(remove_by_id(&mut groups, "5", |g| g.id.as_str()));
        assert_eq!(groups.len(), 4);
        assert!(!remove_by_id(&mut groups, "5", |g| g.id.as_str()));
    }
}
