use serde::{Deserialize, Serialize};

// ============================================================================
// Status enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    Active,
    Inactive,
}

impl ActiveStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "Active",
            ActiveStatus::Inactive => "Inactive",
        }
    }

    pub fn from_flag(active: bool) -> Self {
        if active {
            ActiveStatus::Active
        } else {
            ActiveStatus::Inactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerStatus {
    Active,
    Inactive,
    Suspended,
}

impl LearnerStatus {
    pub fn code(&self) -> &'static str {
        match self {
            LearnerStatus::Active => "active",
            LearnerStatus::Inactive => "inactive",
            LearnerStatus::Suspended => "suspended",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LearnerStatus::Active => "Active",
            LearnerStatus::Inactive => "Inactive",
            LearnerStatus::Suspended => "Suspended",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            LearnerStatus::Active => "primary",
            LearnerStatus::Inactive => "neutral",
            LearnerStatus::Suspended => "error",
        }
    }

    pub fn all() -> [LearnerStatus; 3] {
        [
            LearnerStatus::Active,
            LearnerStatus::Inactive,
            LearnerStatus::Suspended,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Published,
    Draft,
}

impl CourseStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            CourseStatus::Published => "Published",
            CourseStatus::Draft => "Draft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventMode {
    Online,
    Physical,
}

impl EventMode {
    pub fn code(&self) -> &'static str {
        match self {
            EventMode::Online => "online",
            EventMode::Physical => "physical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventMode::Online => "Online",
            EventMode::Physical => "Physical",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "online" => Some(EventMode::Online),
            "physical" => Some(EventMode::Physical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Pending,
}

impl AttendanceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Pending => "pending",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Pending => "Pending",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "primary",
            AttendanceStatus::Absent => "error",
            AttendanceStatus::Pending => "neutral",
        }
    }

    pub fn all() -> [AttendanceStatus; 3] {
        [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Pending,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Scenario,
    Mixed,
}

impl QuestionType {
    pub fn code(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Scenario => "scenario",
            QuestionType::Mixed => "mixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::Scenario => "Scenario",
            QuestionType::Mixed => "Mixed",
        }
    }

    pub fn all() -> [QuestionType; 3] {
        [QuestionType::Mcq, QuestionType::Scenario, QuestionType::Mixed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|q| q.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Active,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl ResultStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "pass",
            ResultStatus::Fail => "fail",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "Pass",
            ResultStatus::Fail => "Fail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Issued,
    Pending,
}

impl IssueStatus {
    pub fn code(&self) -> &'static str {
        match self {
            IssueStatus::Issued => "issued",
            IssueStatus::Pending => "pending",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IssueStatus::Issued => "Issued",
            IssueStatus::Pending => "Pending",
        }
    }
}

/// Repository content kinds; wider than lesson content types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    Video,
    Pdf,
    Xr,
    Scorm,
}

impl RepositoryKind {
    pub fn code(&self) -> &'static str {
        match self {
            RepositoryKind::Video => "video",
            RepositoryKind::Pdf => "pdf",
            RepositoryKind::Xr => "xr",
            RepositoryKind::Scorm => "scorm",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RepositoryKind::Video => "Video",
            RepositoryKind::Pdf => "PDF",
            RepositoryKind::Xr => "XR/VR",
            RepositoryKind::Scorm => "SCORM",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            RepositoryKind::Video => "video",
            RepositoryKind::Pdf => "file-text",
            RepositoryKind::Xr => "box",
            RepositoryKind::Scorm => "layers",
        }
    }

    pub fn all() -> [RepositoryKind; 4] {
        [
            RepositoryKind::Video,
            RepositoryKind::Pdf,
            RepositoryKind::Xr,
            RepositoryKind::Scorm,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_users: u32,
    pub courses_assigned: u32,
    /// Percent, 0..=100
    pub completion: u8,
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedLearner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub group: String,
    pub assigned_course: String,
    pub progress: u8,
    pub last_active: String,
    pub attempts: u32,
    pub status: LearnerStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: String,
    pub modules: u32,
    pub duration: String,
    pub assessment_required: bool,
    pub certificate_available: bool,
    pub status: CourseStatus,
    pub enrolled_users: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEvent {
    pub id: String,
    pub name: String,
    pub course: String,
    /// ISO date, may be empty for events created without one
    pub date: String,
    pub time: String,
    pub mode: EventMode,
    pub location: String,
    pub max_participants: u32,
    pub enrolled: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub user_name: String,
    pub event_name: String,
    pub date: String,
    pub time: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub name: String,
    pub course: String,
    pub question_type: QuestionType,
    pub passing_score: u32,
    pub max_attempts: u32,
    /// Minutes
    pub time_limit: u32,
    pub total_questions: u32,
    pub status: AssessmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub id: String,
    pub user_name: String,
    pub assessment_name: String,
    pub course: String,
    pub attempt_count: u32,
    pub score: u32,
    pub result: ResultStatus,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: String,
    pub user_name: String,
    pub course: String,
    /// 1..=5 stars
    pub trainer_rating: u8,
    pub content_rating: u8,
    pub comments: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCertificate {
    pub id: String,
    pub user_name: String,
    pub course_name: String,
    pub module_name: String,
    pub training_name: String,
    pub completion_date: String,
    pub certificate_id: String,
    pub status: IssueStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryItem {
    pub id: String,
    pub name: String,
    pub kind: RepositoryKind,
    pub duration: String,
    pub assigned_courses: Vec<String>,
    pub resume_enabled: bool,
    pub size: String,
}
