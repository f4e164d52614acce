use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    InProgress,
    NotStarted,
    Completed,
}

impl TrainingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TrainingStatus::InProgress => "in_progress",
            TrainingStatus::NotStarted => "not_started",
            TrainingStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingStatus::InProgress => "In Progress",
            TrainingStatus::NotStarted => "Not Started",
            TrainingStatus::Completed => "Completed",
        }
    }

    /// Label of the card's primary action
    pub fn action_label(&self) -> &'static str {
        match self {
            TrainingStatus::InProgress => "Continue",
            TrainingStatus::NotStarted => "Start",
            TrainingStatus::Completed => "Review",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TrainingStatus::InProgress => "status-pill--warning",
            TrainingStatus::NotStarted => "status-pill--neutral",
            TrainingStatus::Completed => "status-pill--success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub progress: u8,
    pub total_modules: u32,
    pub completed_modules: u32,
    pub duration: String,
    pub deadline: String,
    pub status: TrainingStatus,
    pub last_accessed: String,
    pub assessment_required: bool,
    pub certificate_available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    Pending,
    Passed,
    Failed,
}

impl AttemptStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AttemptStatus::Pending => "pending",
            AttemptStatus::Passed => "passed",
            AttemptStatus::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttemptStatus::Pending => "Pending",
            AttemptStatus::Passed => "Passed",
            AttemptStatus::Failed => "Failed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AttemptStatus::Pending => "status-pill--info",
            AttemptStatus::Passed => "status-pill--success",
            AttemptStatus::Failed => "status-pill--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerAssessment {
    pub id: u32,
    pub name: String,
    pub course: String,
    pub duration: String,
    pub questions: u32,
    pub passing_score: u32,
    pub max_attempts: u32,
    pub attempts_used: u32,
    pub status: AttemptStatus,
    pub score: Option<u32>,
    pub last_attempt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    Completed,
    InProgress,
    Locked,
}

impl ModuleStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleStatus::Completed => "Completed",
            ModuleStatus::InProgress => "In Progress",
            ModuleStatus::Locked => "Locked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Pdf,
    Xr,
}

impl MediaKind {
    pub fn icon_name(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Pdf => "file-text",
            MediaKind::Xr => "box",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryModule {
    pub id: u32,
    pub name: String,
    pub course: String,
    pub duration: String,
    pub progress: u8,
    pub status: ModuleStatus,
    pub kind: MediaKind,
    pub order: u32,
    pub is_locked: bool,
}

impl LibraryModule {
    pub fn action_label(&self) -> &'static str {
        if self.is_locked {
            return "Locked";
        }
        match self.status {
            ModuleStatus::Completed => "Review",
            ModuleStatus::InProgress => "Resume",
            ModuleStatus::Locked => "Start",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceMode {
    Physical,
    Online,
}

impl AttendanceMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            AttendanceMode::Physical => "Physical",
            AttendanceMode::Online => "Online",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub mode: AttendanceMode,
    pub location: String,
    pub course: String,
    pub instructor: String,
    pub max_participants: u32,
    pub enrolled: u32,
    pub upcoming: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarnedStatus {
    Active,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedCertificate {
    pub id: String,
    pub name: String,
    pub course: String,
    pub issued_date: String,
    pub expiry_date: String,
    pub status: EarnedStatus,
    pub completion_date: String,
    pub training_name: String,
    pub modules_completed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequirements {
    pub modules_completed: bool,
    pub assessment_passed: bool,
    pub waiting_period: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCertificate {
    pub id: u32,
    pub name: String,
    pub course: String,
    pub progress: u8,
    pub requirements: CertificateRequirements,
    pub estimated_completion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Module,
    Assessment,
    Event,
    Certificate,
}

impl ActivityKind {
    pub fn icon_name(&self) -> &'static str {
        match self {
            ActivityKind::Module => "book-open",
            ActivityKind::Assessment => "alert-circle",
            ActivityKind::Event => "calendar",
            ActivityKind::Certificate => "check-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    pub course: String,
    pub time: String,
    pub duration: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerKpi {
    pub title: String,
    pub value: String,
    pub icon: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCourse {
    pub id: u32,
    pub name: String,
    pub progress: u8,
    pub modules_completed: u32,
    pub total_modules: u32,
    pub last_accessed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenActivity {
    pub active_time: String,
    pub idle_time: String,
    pub focus_score: u8,
    pub sessions_today: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_id: String,
    pub account_status: String,
    pub join_date: String,
    pub last_login: String,
}
