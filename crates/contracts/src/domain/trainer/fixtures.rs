//! Demo rows for the trainer pages

use super::aggregate::*;

pub fn groups() -> Vec<TrainingGroup> {
    let g = |id: &str, name: &str, description: &str, users, courses, completion, status| TrainingGroup {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        total_users: users,
        courses_assigned: courses,
        completion,
        status,
    };
    use super::aggregate::ActiveStatus::*;
    vec![
        g("1", "Safety Team A", "Primary safety training group", 25, 5, 78, Active),
        g("2", "New Hires Q1", "Onboarding batch January", 18, 8, 45, Active),
        g("3", "Maintenance Crew", "Technical maintenance team", 12, 4, 92, Active),
        g("4", "Management Team", "Senior management training", 8, 3, 100, Active),
        g("5", "Legacy Group", "Archived training group", 30, 6, 67, Inactive),
    ]
}

pub fn learners() -> Vec<AssignedLearner> {
    #[allow(clippy::too_many_arguments)]
    fn l(
        id: &str,
        name: &str,
        email: &str,
        group: &str,
        course: &str,
        progress: u8,
        last_active: &str,
        attempts: u32,
        status: LearnerStatus,
    ) -> AssignedLearner {
        AssignedLearner {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            group: group.into(),
            assigned_course: course.into(),
            progress,
            last_active: last_active.into(),
            attempts,
            status,
        }
    }
    use super::aggregate::LearnerStatus::*;
    vec![
        l("1", "John Smith", "john.smith@company.com", "Safety Team A", "Safety Training 101", 85, "2 hours ago", 2, Active),
        l("2", "Sarah Johnson", "sarah.j@company.com", "New Hires Q1", "Onboarding Basics", 45, "1 day ago", 1, Active),
        l("3", "Mike Wilson", "mike.w@company.com", "Maintenance Crew", "Equipment Handling", 100, "3 hours ago", 3, Active),
        l("4", "Emily Brown", "emily.b@company.com", "Safety Team A", "Fire Safety", 60, "5 days ago", 1, Inactive),
        l("5", "David Lee", "david.l@company.com", "New Hires Q1", "Safety Training 101", 0, "Never", 0, Suspended),
        l("6", "Lisa Chen", "lisa.c@company.com", "Management Team", "Leadership Training", 92, "1 hour ago", 2, Active),
    ]
}

pub fn courses() -> Vec<Course> {
    #[allow(clippy::too_many_arguments)]
    fn c(
        id: &str,
        name: &str,
        description: &str,
        modules: u32,
        duration: &str,
        assessment: bool,
        certificate: bool,
        status: CourseStatus,
        enrolled: u32,
    ) -> Course {
        Course {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            modules,
            duration: duration.into(),
            assessment_required: assessment,
            certificate_available: certificate,
            status,
            enrolled_users: enrolled,
        }
    }
    use super::aggregate::CourseStatus::*;
    vec![
        c("1", "Safety Training 101", "Comprehensive workplace safety training", 8, "4 hours", true, true, Published, 125),
        c("2", "Equipment Handling", "Proper handling of industrial equipment", 5, "2.5 hours", true, true, Published, 78),
        c("3", "Fire Safety Basics", "Fire prevention and emergency response", 4, "1.5 hours", true, true, Published, 200),
        c("4", "First Aid Essentials", "Basic first aid and CPR training", 6, "3 hours", true, true, Draft, 0),
        c("5", "Leadership Training", "Management and leadership skills", 10, "6 hours", false, true, Published, 45),
    ]
}

pub fn events() -> Vec<TrainingEvent> {
    #[allow(clippy::too_many_arguments)]
    fn e(
        id: &str,
        name: &str,
        course: &str,
        date: &str,
        time: &str,
        mode: EventMode,
        location: &str,
        max: u32,
        enrolled: u32,
    ) -> TrainingEvent {
        TrainingEvent {
            id: id.into(),
            name: name.into(),
            course: course.into(),
            date: date.into(),
            time: time.into(),
            mode,
            location: location.into(),
            max_participants: max,
            enrolled,
        }
    }
    use super::aggregate::EventMode::*;
    vec![
        e("1", "Safety Training Session", "Safety Training 101", "2025-01-25", "10:00 AM", Online, "Zoom Meeting", 50, 32),
        e("2", "Equipment Demo", "Equipment Handling", "2025-01-26", "2:00 PM", Physical, "Training Room A", 20, 18),
        e("3", "Fire Drill Practice", "Fire Safety Basics", "2025-01-28", "9:00 AM", Physical, "Main Building", 100, 85),
        e("4", "First Aid Workshop", "First Aid Essentials", "2025-02-01", "11:00 AM", Online, "Teams Meeting", 30, 15),
    ]
}

pub fn attendance() -> Vec<AttendanceRecord> {
    let a = |id: &str, user: &str, event: &str, date: &str, time: &str, status| AttendanceRecord {
        id: id.into(),
        user_name: user.into(),
        event_name: event.into(),
        date: date.into(),
        time: time.into(),
        status,
    };
    use super::aggregate::AttendanceStatus::*;
    vec![
        a("1", "John Smith", "Safety Training Session", "2025-01-25", "10:00 AM", Present),
        a("2", "Sarah Johnson", "Safety Training Session", "2025-01-25", "10:00 AM", Present),
        a("3", "Mike Wilson", "Equipment Demo", "2025-01-26", "2:00 PM", Absent),
        a("4", "Emily Brown", "Fire Drill Practice", "2025-01-28", "9:00 AM", Pending),
        a("5", "David Lee", "Fire Drill Practice", "2025-01-28", "9:00 AM", Pending),
        a("6", "Lisa Chen", "First Aid Workshop", "2025-02-01", "11:00 AM", Pending),
    ]
}

pub fn assessments() -> Vec<Assessment> {
    #[allow(clippy::too_many_arguments)]
    fn a(
        id: &str,
        name: &str,
        course: &str,
        question_type: QuestionType,
        passing: u32,
        attempts: u32,
        limit: u32,
        questions: u32,
        status: AssessmentStatus,
    ) -> Assessment {
        Assessment {
            id: id.into(),
            name: name.into(),
            course: course.into(),
            question_type,
            passing_score: passing,
            max_attempts: attempts,
            time_limit: limit,
            total_questions: questions,
            status,
        }
    }
    use super::aggregate::AssessmentStatus::*;
    use super::aggregate::QuestionType::*;
    vec![
        a("1", "Safety Training Final", "Safety Training 101", Mcq, 80, 3, 60, 50, Active),
        a("2", "Equipment Certification", "Equipment Handling", Scenario, 75, 3, 45, 30, Active),
        a("3", "Fire Safety Quiz", "Fire Safety Basics", Mcq, 85, 3, 30, 25, Active),
        a("4", "First Aid Assessment", "First Aid Essentials", Mixed, 80, 3, 60, 40, Draft),
    ]
}

pub fn reports() -> Vec<AssessmentReport> {
    #[allow(clippy::too_many_arguments)]
    fn r(
        id: &str,
        user: &str,
        assessment: &str,
        course: &str,
        attempts: u32,
        score: u32,
        result: ResultStatus,
        date: &str,
    ) -> AssessmentReport {
        AssessmentReport {
            id: id.into(),
            user_name: user.into(),
            assessment_name: assessment.into(),
            course: course.into(),
            attempt_count: attempts,
            score,
            result,
            date: date.into(),
        }
    }
    use super::aggregate::ResultStatus::*;
    vec![
        r("1", "John Smith", "Safety Training Final", "Safety Training 101", 1, 92, Pass, "2025-01-20"),
        r("2", "Sarah Johnson", "Safety Training Final", "Safety Training 101", 2, 85, Pass, "2025-01-19"),
        r("3", "Mike Wilson", "Equipment Certification", "Equipment Handling", 1, 68, Fail, "2025-01-18"),
        r("4", "Emily Brown", "Fire Safety Quiz", "Fire Safety Basics", 3, 72, Fail, "2025-01-17"),
        r("5", "David Lee", "Safety Training Final", "Safety Training 101", 1, 95, Pass, "2025-01-16"),
        r("6", "Lisa Chen", "Equipment Certification", "Equipment Handling", 2, 88, Pass, "2025-01-15"),
    ]
}

pub fn feedback() -> Vec<FeedbackEntry> {
    let f = |id: &str, user: &str, course: &str, trainer, content, comments: &str, date: &str| FeedbackEntry {
        id: id.into(),
        user_name: user.into(),
        course: course.into(),
        trainer_rating: trainer,
        content_rating: content,
        comments: comments.into(),
        date: date.into(),
    };
    vec![
        f("1", "John Smith", "Safety Training 101", 5, 4, "Excellent training session! Very informative and well-structured.", "2025-01-20"),
        f("2", "Sarah Johnson", "Equipment Handling", 4, 5, "Great hands-on experience. The content was very relevant.", "2025-01-19"),
        f("3", "Mike Wilson", "Fire Safety Basics", 5, 5, "The fire drill was very realistic. Learned a lot!", "2025-01-18"),
        f("4", "Emily Brown", "Safety Training 101", 3, 4, "Good content but the pace was a bit fast.", "2025-01-17"),
        f("5", "David Lee", "First Aid Essentials", 5, 5, "Very practical training. The trainer was excellent!", "2025-01-16"),
    ]
}

pub fn issued_certificates() -> Vec<IssuedCertificate> {
    #[allow(clippy::too_many_arguments)]
    fn c(
        id: &str,
        user: &str,
        course: &str,
        module: &str,
        training: &str,
        date: &str,
        certificate_id: &str,
        status: IssueStatus,
    ) -> IssuedCertificate {
        IssuedCertificate {
            id: id.into(),
            user_name: user.into(),
            course_name: course.into(),
            module_name: module.into(),
            training_name: training.into(),
            completion_date: date.into(),
            certificate_id: certificate_id.into(),
            status,
        }
    }
    use super::aggregate::IssueStatus::*;
    vec![
        c("1", "John Smith", "Safety Training 101", "Module 5", "Q1 Safety Training", "2025-01-20", "CERT-2025-001", Issued),
        c("2", "Sarah Johnson", "Equipment Handling", "Module 3", "Equipment Certification", "2025-01-19", "CERT-2025-002", Issued),
        c("3", "Mike Wilson", "Fire Safety Basics", "Module 4", "Fire Safety Training", "2025-01-18", "CERT-2025-003", Issued),
        c("4", "Emily Brown", "Safety Training 101", "Module 5", "Q1 Safety Training", "2025-01-17", "CERT-2025-004", Pending),
        c("5", "David Lee", "First Aid Essentials", "Module 6", "First Aid Certification", "2025-01-16", "CERT-2025-005", Issued),
    ]
}

pub fn repository() -> Vec<RepositoryItem> {
    let r = |id: &str, name: &str, kind, duration: &str, courses: &[&str], resume, size: &str| RepositoryItem {
        id: id.into(),
        name: name.into(),
        kind,
        duration: duration.into(),
        assigned_courses: courses.iter().map(|c| c.to_string()).collect(),
        resume_enabled: resume,
        size: size.into(),
    };
    use super::aggregate::RepositoryKind::*;
    vec![
        r("1", "Safety Introduction Video", Video, "15 min", &["Safety Training 101"], true, "250 MB"),
        r("2", "Equipment Manual", Pdf, "20 min", &["Equipment Handling"], false, "5 MB"),
        r("3", "Fire Extinguisher VR Training", Xr, "30 min", &["Fire Safety Basics"], true, "1.2 GB"),
        r("4", "First Aid SCORM Module", Scorm, "45 min", &["First Aid Essentials"], true, "150 MB"),
        r("5", "Workplace Hazards Overview", Video, "10 min", &["Safety Training 101", "Fire Safety Basics"], true, "180 MB"),
    ]
}
