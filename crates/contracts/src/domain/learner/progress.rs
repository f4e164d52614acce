//! Status tabs, counters and derived views of the learner pages

use chrono::NaiveDate;

use super::aggregate::*;
use crate::shared::search::ALL;

// ============================================================================
// Trainings
// ============================================================================

/// Tab value is a status code or `"all"`
pub fn trainings_in_tab<'a>(items: &'a [Training], tab: &str) -> Vec<&'a Training> {
    items
        .iter()
        .filter(|t| tab == ALL || t.status.code() == tab)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainingStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub not_started: usize,
}

impl TrainingStats {
    pub fn of(items: &[Training]) -> Self {
        let count = |s: TrainingStatus| items.iter().filter(|t| t.status == s).count();
        Self {
            total: items.len(),
            in_progress: count(TrainingStatus::InProgress),
            completed: count(TrainingStatus::Completed),
            not_started: count(TrainingStatus::NotStarted),
        }
    }
}

// ============================================================================
// Assessments
// ============================================================================

pub fn assessments_in_tab<'a>(items: &'a [LearnerAssessment], tab: &str) -> Vec<&'a LearnerAssessment> {
    items
        .iter()
        .filter(|a| tab == ALL || a.status.code() == tab)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssessmentStats {
    pub total: usize,
    pub pending: usize,
    pub passed: usize,
    pub failed: usize,
}

impl AssessmentStats {
    pub fn of(items: &[LearnerAssessment]) -> Self {
        let count = |s: AttemptStatus| items.iter().filter(|a| a.status == s).count();
        Self {
            total: items.len(),
            pending: count(AttemptStatus::Pending),
            passed: count(AttemptStatus::Passed),
            failed: count(AttemptStatus::Failed),
        }
    }
}

/// Dialog to show before an attempt is started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPrompt {
    /// Go straight to the assessment
    Proceed,
    /// Remaining attempts reminder; `final_attempt` when only one is left
    Warning { remaining: u32, final_attempt: bool },
    /// All attempts would be used up by a failure
    Deactivated,
}

impl LearnerAssessment {
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    pub fn can_retry(&self) -> bool {
        self.status == AttemptStatus::Failed && self.remaining_attempts() > 0
    }

    pub fn attempts_label(&self) -> String {
        format!("{}/{} used", self.attempts_used, self.max_attempts)
    }

    pub fn attempts_class(&self) -> &'static str {
        match self.remaining_attempts() {
            1 => "attempts--critical",
            2 => "attempts--warning",
            _ => "attempts--ok",
        }
    }

    pub fn start_prompt(&self) -> AttemptPrompt {
        match self.remaining_attempts() {
            1 => AttemptPrompt::Warning {
                remaining: 1,
                final_attempt: true,
            },
            _ => AttemptPrompt::Proceed,
        }
    }

    pub fn retry_prompt(&self) -> AttemptPrompt {
        match self.remaining_attempts() {
            0 | 1 => AttemptPrompt::Deactivated,
            remaining => AttemptPrompt::Warning {
                remaining,
                final_attempt: false,
            },
        }
    }
}

// ============================================================================
// Library
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseModules<'a> {
    pub course: &'a str,
    pub modules: Vec<&'a LibraryModule>,
}

impl CourseModules<'_> {
    pub fn completed(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| m.status == ModuleStatus::Completed)
            .count()
    }

    /// Rounded share of completed modules
    pub fn progress(&self) -> u32 {
        if self.modules.is_empty() {
            return 0;
        }
        (self.completed() as f64 / self.modules.len() as f64 * 100.0).round() as u32
    }

    pub fn progress_label(&self) -> String {
        format!("{}/{} completed", self.completed(), self.modules.len())
    }
}

/// Modules grouped by course in first-seen order, each sorted by position
pub fn group_by_course(items: &[LibraryModule]) -> Vec<CourseModules<'_>> {
    let mut groups: Vec<CourseModules<'_>> = Vec::new();
    for m in items {
        match groups.iter_mut().find(|g| g.course == m.course) {
            Some(g) => g.modules.push(m),
            None => groups.push(CourseModules {
                course: &m.course,
                modules: vec![m],
            }),
        }
    }
    for g in &mut groups {
        g.modules.sort_by_key(|m| m.order);
    }
    groups
}

pub fn count_modules(items: &[LibraryModule], status: ModuleStatus) -> usize {
    items.iter().filter(|m| m.status == status).count()
}

// ============================================================================
// Calendar
// ============================================================================

pub fn events_for_date(items: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    items.iter().filter(|e| e.date == date).collect()
}

/// Upcoming events, soonest first
pub fn upcoming_events(items: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    let mut out: Vec<_> = items.iter().filter(|e| e.upcoming).collect();
    out.sort_by_key(|e| e.date);
    out
}

/// Days of the month carrying at least one event
pub fn event_days(items: &[CalendarEvent], year: i32, month: u32) -> Vec<u32> {
    use chrono::Datelike;

    let mut days: Vec<u32> = items
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .map(|e| e.date.day())
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

// ============================================================================
// Certificates
// ============================================================================

pub fn active_certificates(items: &[EarnedCertificate]) -> Vec<&EarnedCertificate> {
    items
        .iter()
        .filter(|c| c.status == EarnedStatus::Active)
        .collect()
}

impl CertificateRequirements {
    pub fn met(&self) -> usize {
        [self.modules_completed, self.assessment_passed, self.waiting_period]
            .iter()
            .filter(|b| **b)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;

    #[test]
    fn training_tabs_and_stats() {
        let items = fixtures::trainings();
        let stats = TrainingStats::of(&items);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.in_progress, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.not_started, 1);

        assert_eq!(trainings_in_tab(&items, ALL).len(), 6);
        let started = trainings_in_tab(&items, "not_started");
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].name, "Equipment Handling Course");
        assert_eq!(started[0].status.action_label(), "Start");
    }

    #[test]
    fn assessment_stats() {
        let items = fixtures::assessments();
        let stats = AssessmentStats::of(&items);
        assert_eq!((stats.pending, stats.passed, stats.failed), (1, 2, 2));
        assert_eq!(assessments_in_tab(&items, "failed").len(), 2);
    }

    #[test]
    fn last_attempt_is_flagged() {
        let items = fixtures::assessments();
        // Emergency Response Test: 2 of 3 used
        let last = &items[2];
        assert_eq!(last.remaining_attempts(), 1);
        assert_eq!(last.attempts_class(), "attempts--critical");
        assert_eq!(
            last.start_prompt(),
            AttemptPrompt::Warning {
                remaining: 1,
                final_attempt: true
            }
        );
        assert_eq!(last.retry_prompt(), AttemptPrompt::Deactivated);

        // Fire Safety Quiz: 1 of 3 used
        let quiz = &items[1];
        assert!(quiz.can_retry());
        assert_eq!(quiz.start_prompt(), AttemptPrompt::Proceed);
        assert_eq!(
            quiz.retry_prompt(),
            AttemptPrompt::Warning {
                remaining: 2,
                final_attempt: false
            }
        );
        assert_eq!(quiz.attempts_label(), "1/3 used");
        assert_eq!(items[0].attempts_class(), "attempts--ok");
    }

    #[test]
    fn library_groups_by_course() {
        let items = fixtures::library_modules();
        let groups = group_by_course(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].course, "Workplace Safety Training");
        assert_eq!(groups[0].modules.len(), 5);
        assert_eq!(groups[0].progress(), 40);
        assert_eq!(groups[1].progress(), 33);
        assert_eq!(groups[1].progress_label(), "1/3 completed");
        assert_eq!(count_modules(&items, ModuleStatus::Locked), 3);
        assert_eq!(items[3].action_label(), "Locked");
        assert_eq!(items[2].action_label(), "Resume");
    }

    #[test]
    fn upcoming_events_are_sorted() {
        let items = fixtures::calendar_events();
        let upcoming = upcoming_events(&items);
        assert_eq!(upcoming.len(), 4);
        assert!(upcoming.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(upcoming.iter().all(|e| e.name != "Monthly Safety Meeting"));

        let day = NaiveDate::from_ymd_opt(2026, 1, 27).unwrap();
        let on_day = events_for_date(&items, day);
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].instructor, "Dr. Sarah Johnson");
        assert_eq!(event_days(&items, 2026, 1), vec![22, 25, 27, 30]);
    }

    #[test]
    fn expired_certificates_are_not_active() {
        let items = fixtures::earned_certificates();
        let active = active_certificates(&items);
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|c| c.id != "CERT-2024-042"));
        assert!(fixtures::pending_certificates()
            .iter()
            .all(|p| p.requirements.met() == 0));
    }

    #[test]
    fn current_courses_follow_trainings() {
        let current = fixtures::current_courses();
        assert_eq!(current.len(), 3);
        assert_eq!(current[0].name, "Workplace Safety Training");
        assert_eq!(current[2].last_accessed, "Yesterday");
    }
}
