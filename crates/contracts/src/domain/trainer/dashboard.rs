//! Static figures of the trainer dashboard

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceWeek {
    pub label: &'static str,
    pub enrolled: u32,
    pub attended: u32,
}

impl AttendanceWeek {
    pub fn rate(&self) -> u32 {
        if self.enrolled == 0 {
            0
        } else {
            (self.attended * 100 + self.enrolled / 2) / self.enrolled
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseActivity {
    pub course: &'static str,
    pub users: u32,
    pub completion: u32,
    pub completed: bool,
}

pub fn kpi_cards() -> Vec<KpiCard> {
    vec![
        KpiCard { title: "Total Courses", value: "24", change: "+3 this month", icon: "book-open", trend: Trend::Up },
        KpiCard { title: "Active Trainings", value: "8", change: "5 in progress", icon: "activity", trend: Trend::Up },
        KpiCard { title: "Total Users Assigned", value: "256", change: "+18 new users", icon: "users", trend: Trend::Up },
        KpiCard { title: "Avg. Completion", value: "78%", change: "+5% from last month", icon: "trending-up", trend: Trend::Up },
        KpiCard { title: "Pending Feedback", value: "12", change: "3 urgent", icon: "message-square", trend: Trend::Neutral },
    ]
}

pub fn completion_trend() -> Vec<TrendPoint> {
    [("Jan", 65), ("Feb", 72), ("Mar", 68), ("Apr", 78), ("May", 82), ("Jun", 85)]
        .into_iter()
        .map(|(label, value)| TrendPoint { label, value })
        .collect()
}

/// Pass/fail split in percent
pub fn assessment_split() -> (u32, u32) {
    (78, 22)
}

pub fn attendance_weeks() -> Vec<AttendanceWeek> {
    [("Week 1", 120, 105), ("Week 2", 130, 118), ("Week 3", 125, 110), ("Week 4", 140, 132)]
        .into_iter()
        .map(|(label, enrolled, attended)| AttendanceWeek { label, enrolled, attended })
        .collect()
}

pub fn recent_activity() -> Vec<CourseActivity> {
    [
        ("Safety Training 101", 45, 89, false),
        ("Equipment Handling", 32, 76, false),
        ("Fire Safety Basics", 28, 92, true),
        ("First Aid Essentials", 56, 65, false),
        ("Workplace Hazards", 38, 100, true),
    ]
    .into_iter()
    .map(|(course, users, completion, completed)| CourseActivity { course, users, completion, completed })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_rate_rounds() {
        let weeks = attendance_weeks();
        assert_eq!(weeks[0].rate(), 88);
        assert_eq!(weeks[3].rate(), 94);
        let empty = AttendanceWeek { label: "x", enrolled: 0, attended: 0 };
        assert_eq!(empty.rate(), 0);
    }

    #[test]
    fn dashboard_has_five_kpis() {
        assert_eq!(kpi_cards().len(), 5);
        assert_eq!(completion_trend().last().map(|p| p.value), Some(85));
        let (pass, fail) = assessment_split();
        assert_eq!(pass + fail, 100);
    }
}
