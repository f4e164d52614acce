//! Demo rows for the learner pages

use chrono::NaiveDate;

use super::aggregate::*;

pub fn trainings() -> Vec<Training> {
    #[allow(clippy::too_many_arguments)]
    fn t(
        id: u32,
        name: &str,
        description: &str,
        progress: u8,
        modules: (u32, u32),
        duration: &str,
        deadline: &str,
        status: TrainingStatus,
        last_accessed: &str,
    ) -> Training {
        Training {
            id,
            name: name.into(),
            description: description.into(),
            progress,
            completed_modules: modules.0,
            total_modules: modules.1,
            duration: duration.into(),
            deadline: deadline.into(),
            status,
            last_accessed: last_accessed.into(),
            assessment_required: true,
            certificate_available: true,
        }
    }
    use super::aggregate::TrainingStatus::*;
    vec![
        t(1, "Workplace Safety Training", "Comprehensive training on workplace safety protocols and procedures.", 75, (6, 8), "4 hours", "Feb 15, 2026", InProgress, "2 hours ago"),
        t(2, "Fire Safety Essentials", "Learn fire prevention, detection, and emergency response procedures.", 40, (2, 5), "2.5 hours", "Feb 20, 2026", InProgress, "4 hours ago"),
        t(3, "Emergency Response Training", "Training on emergency response procedures and first aid basics.", 20, (1, 5), "3 hours", "Mar 1, 2026", InProgress, "Yesterday"),
        t(4, "Equipment Handling Course", "Safe handling and operation of industrial equipment.", 0, (0, 6), "3.5 hours", "Mar 15, 2026", NotStarted, "-"),
        t(5, "Basic Safety Certification", "Fundamental safety training for all employees.", 100, (4, 4), "2 hours", "-", Completed, "3 days ago"),
        t(6, "Chemical Safety Handling", "Safe practices for handling hazardous chemicals.", 100, (5, 5), "2.5 hours", "-", Completed, "1 week ago"),
    ]
}

pub fn assessments() -> Vec<LearnerAssessment> {
    #[allow(clippy::too_many_arguments)]
    fn a(
        id: u32,
        name: &str,
        course: &str,
        duration: &str,
        questions: u32,
        passing_score: u32,
        attempts_used: u32,
        status: AttemptStatus,
        result: Option<(u32, &str)>,
    ) -> LearnerAssessment {
        LearnerAssessment {
            id,
            name: name.into(),
            course: course.into(),
            duration: duration.into(),
            questions,
            passing_score,
            max_attempts: 3,
            attempts_used,
            status,
            score: result.map(|(s, _)| s),
            last_attempt: result.map(|(_, d)| d.to_string()),
        }
    }
    use super::aggregate::AttemptStatus::*;
    vec![
        a(1, "Workplace Safety Assessment", "Workplace Safety Training", "30 min", 20, 80, 0, Pending, None),
        a(2, "Fire Safety Quiz", "Fire Safety Essentials", "20 min", 15, 75, 1, Failed, Some((60, "Jan 20, 2026"))),
        a(3, "Emergency Response Test", "Emergency Response Training", "25 min", 18, 80, 2, Failed, Some((70, "Jan 18, 2026"))),
        a(4, "Basic Safety Certification Exam", "Basic Safety Certification", "45 min", 30, 85, 1, Passed, Some((92, "Jan 10, 2026"))),
        a(5, "Chemical Safety Assessment", "Chemical Safety Handling", "30 min", 20, 80, 2, Passed, Some((85, "Jan 5, 2026"))),
    ]
}

pub fn library_modules() -> Vec<LibraryModule> {
    #[allow(clippy::too_many_arguments)]
    fn m(
        id: u32,
        name: &str,
        course: &str,
        duration: &str,
        progress: u8,
        status: ModuleStatus,
        kind: MediaKind,
        order: u32,
    ) -> LibraryModule {
        LibraryModule {
            id,
            name: name.into(),
            course: course.into(),
            duration: duration.into(),
            progress,
            status,
            kind,
            order,
            is_locked: status == ModuleStatus::Locked,
        }
    }
    use super::aggregate::MediaKind::*;
    use super::aggregate::ModuleStatus::*;
    const WS: &str = "Workplace Safety Training";
    const FS: &str = "Fire Safety Essentials";
    vec![
        m(1, "Introduction to Workplace Safety", WS, "30 min", 100, Completed, Video, 1),
        m(2, "Hazard Identification", WS, "45 min", 100, Completed, Video, 2),
        m(3, "Personal Protective Equipment", WS, "35 min", 60, InProgress, Video, 3),
        m(4, "Emergency Procedures", WS, "40 min", 0, Locked, Video, 4),
        m(5, "Safety Documentation", WS, "25 min", 0, Locked, Pdf, 5),
        m(6, "Fire Prevention Basics", FS, "35 min", 100, Completed, Video, 1),
        m(7, "Fire Extinguisher Training", FS, "40 min", 50, InProgress, Xr, 2),
        m(8, "Evacuation Procedures", FS, "30 min", 0, Locked, Video, 3),
    ]
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn calendar_events() -> Vec<CalendarEvent> {
    #[allow(clippy::too_many_arguments)]
    fn e(
        id: u32,
        name: &str,
        date: NaiveDate,
        time: &str,
        mode: AttendanceMode,
        location: &str,
        course: &str,
        instructor: &str,
        seats: (u32, u32),
        upcoming: bool,
    ) -> CalendarEvent {
        CalendarEvent {
            id,
            name: name.into(),
            date,
            time: time.into(),
            mode,
            location: location.into(),
            course: course.into(),
            instructor: instructor.into(),
            max_participants: seats.0,
            enrolled: seats.1,
            upcoming,
        }
    }
    use super::aggregate::AttendanceMode::*;
    vec![
        e(1, "Safety Drill Practice", day(2026, 1, 25), "10:00 AM - 11:30 AM", Physical, "Training Hall A", "Workplace Safety Training", "John Smith", (30, 25), true),
        e(2, "First Aid Training Session", day(2026, 1, 27), "2:00 PM - 4:00 PM", Online, "https://meet.example.com/first-aid", "Emergency Response Training", "Dr. Sarah Johnson", (50, 42), true),
        e(3, "Equipment Handling Workshop", day(2026, 1, 30), "11:00 AM - 1:00 PM", Physical, "Workshop B", "Equipment Handling Course", "Mike Brown", (20, 18), true),
        e(4, "Fire Safety Quiz Review", day(2026, 2, 3), "3:00 PM - 4:00 PM", Online, "https://meet.example.com/fire-safety", "Fire Safety Essentials", "Emily Davis", (40, 35), true),
        e(5, "Monthly Safety Meeting", day(2026, 1, 22), "10:00 AM - 11:00 AM", Online, "https://meet.example.com/monthly-safety", "General Training", "John Smith", (100, 85), false),
    ]
}

pub fn earned_certificates() -> Vec<EarnedCertificate> {
    #[allow(clippy::too_many_arguments)]
    fn c(
        id: &str,
        name: &str,
        course: &str,
        issued: &str,
        expiry: &str,
        status: EarnedStatus,
        training: &str,
        modules: u32,
    ) -> EarnedCertificate {
        EarnedCertificate {
            id: id.into(),
            name: name.into(),
            course: course.into(),
            issued_date: issued.into(),
            expiry_date: expiry.into(),
            status,
            completion_date: issued.into(),
            training_name: training.into(),
            modules_completed: modules,
        }
    }
    use super::aggregate::EarnedStatus::*;
    vec![
        c("CERT-2026-001", "Basic Safety Certification", "Basic Safety Certification", "Jan 10, 2026", "Jan 10, 2027", Active, "Workplace Safety Program", 4),
        c("CERT-2026-002", "Chemical Safety Handler", "Chemical Safety Handling", "Jan 5, 2026", "Jan 5, 2027", Active, "Chemical Safety Program", 5),
        c("CERT-2025-015", "Fire Safety Awareness", "Fire Safety Basics", "Dec 15, 2025", "Dec 15, 2026", Active, "Fire Safety Program", 3),
        c("CERT-2024-042", "First Aid Responder", "First Aid Training", "Nov 20, 2024", "Nov 20, 2025", Expired, "Emergency Response Program", 6),
    ]
}

pub fn pending_certificates() -> Vec<PendingCertificate> {
    let p = |id, name: &str, course: &str, progress, estimated: &str| PendingCertificate {
        id,
        name: name.into(),
        course: course.into(),
        progress,
        requirements: CertificateRequirements::default(),
        estimated_completion: estimated.into(),
    };
    vec![
        p(1, "Workplace Safety Expert", "Workplace Safety Training", 75, "Feb 15, 2026"),
        p(2, "Fire Safety Specialist", "Fire Safety Essentials", 40, "Mar 1, 2026"),
    ]
}

pub fn dashboard_kpis() -> Vec<LearnerKpi> {
    let k = |title: &str, value: &str, icon: &str, change: &str| LearnerKpi {
        title: title.into(),
        value: value.into(),
        icon: icon.into(),
        change: change.into(),
    };
    vec![
        k("Courses Enrolled", "8", "book-open", "+2 this month"),
        k("Courses Running", "3", "play-circle", "In progress"),
        k("Events Completed", "12", "check-circle", "+4 this month"),
        k("Upcoming Events", "5", "calendar", "Next 7 days"),
    ]
}

pub fn activity_timeline() -> Vec<ActivityEntry> {
    let a = |id, kind, title: &str, course: &str, time: &str, duration: &str, completed| ActivityEntry {
        id,
        kind,
        title: title.into(),
        course: course.into(),
        time: time.into(),
        duration: duration.into(),
        completed,
    };
    use super::aggregate::ActivityKind::*;
    vec![
        a(1, Module, "Completed Module: Safety Protocols", "Workplace Safety Training", "2 hours ago", "45 min", true),
        a(2, Assessment, "Started Assessment: Fire Safety Quiz", "Fire Safety Essentials", "4 hours ago", "20 min", false),
        a(3, Event, "Attended: Virtual Safety Workshop", "Monthly Safety Meeting", "Yesterday", "1.5 hours", true),
        a(4, Module, "Resumed Module: Emergency Procedures", "Emergency Response Training", "Yesterday", "30 min", false),
        a(5, Certificate, "Certificate Earned: Basic Safety", "Basic Safety Certification", "3 days ago", "-", true),
    ]
}

pub fn current_courses() -> Vec<CurrentCourse> {
    trainings()
        .into_iter()
        .filter(|t| t.status == TrainingStatus::InProgress)
        .map(|t| CurrentCourse {
            id: t.id,
            name: t.name,
            progress: t.progress,
            modules_completed: t.completed_modules,
            total_modules: t.total_modules,
            last_accessed: t.last_accessed,
        })
        .collect()
}

pub fn screen_activity() -> ScreenActivity {
    ScreenActivity {
        active_time: "4h 32m".into(),
        idle_time: "45m".into(),
        focus_score: 85,
        sessions_today: 3,
    }
}

/// Profile card contents; the display name comes from the session
pub fn profile(name: &str) -> LearnerProfile {
    LearnerProfile {
        name: name.into(),
        email: "john.doe@company.com".into(),
        phone: "+1 (555) 123-4567".into(),
        user_id: "USR-2026-001".into(),
        account_status: "Active".into(),
        join_date: "Jan 1, 2026".into(),
        last_login: "Jan 23, 2026, 10:30 AM".into(),
    }
}
