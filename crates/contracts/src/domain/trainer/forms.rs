//! Create dialogs of the trainer pages. Each draft validates and turns
//! into a new page-local row; nothing is persisted.

use super::aggregate::*;
use crate::shared::validation::{require, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl Default for GroupDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            active: true,
        }
    }
}

impl GroupDraft {
    pub fn into_group(self, id: String) -> Result<TrainingGroup, ValidationError> {
        require(&self.name, "Group name is required")?;
        Ok(TrainingGroup {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            total_users: 0,
            courses_assigned: 0,
            completion: 0,
            status: ActiveStatus::from_flag(self.active),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    pub description: String,
    pub assessment_required: bool,
    pub certificate_available: bool,
    /// Days allowed between enrolment and completion
    pub completion_gap: u32,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            assessment_required: true,
            certificate_available: true,
            completion_gap: 15,
        }
    }
}

impl CourseDraft {
    /// New courses start as empty drafts
    pub fn into_course(self, id: String) -> Result<Course, ValidationError> {
        require(&self.name, "Course title is required")?;
        Ok(Course {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            modules: 0,
            duration: "0 hours".to_string(),
            assessment_required: self.assessment_required,
            certificate_available: self.certificate_available,
            status: CourseStatus::Draft,
            enrolled_users: 0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub course: String,
    pub date: String,
    pub time: String,
    pub mode: EventMode,
    pub location: String,
    pub max_participants: u32,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            course: String::new(),
            date: String::new(),
            time: String::new(),
            mode: EventMode::Online,
            location: String::new(),
            max_participants: 50,
        }
    }
}

impl EventDraft {
    pub fn into_event(self, id: String) -> Result<TrainingEvent, ValidationError> {
        if self.name.trim().is_empty() || self.course.trim().is_empty() {
            return Err(ValidationError::Required("Event name and course are required"));
        }
        Ok(TrainingEvent {
            id,
            name: self.name.trim().to_string(),
            course: self.course,
            date: self.date,
            time: self.time,
            mode: self.mode,
            location: self.location,
            max_participants: self.max_participants,
            enrolled: 0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentDraft {
    pub name: String,
    pub course: String,
    pub question_type: QuestionType,
    pub passing_score: u32,
    pub max_attempts: u32,
    pub time_limit: u32,
}

impl Default for AssessmentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            course: String::new(),
            question_type: QuestionType::Mcq,
            passing_score: 80,
            max_attempts: 3,
            time_limit: 60,
        }
    }
}

impl AssessmentDraft {
    pub fn into_assessment(self, id: String) -> Result<Assessment, ValidationError> {
        if self.name.trim().is_empty() || self.course.trim().is_empty() {
            return Err(ValidationError::Required(
                "Assessment name and course are required",
            ));
        }
        if self.passing_score > 100 {
            return Err(ValidationError::Invalid(
                "Passing score must be between 0 and 100",
            ));
        }
        Ok(Assessment {
            id,
            name: self.name.trim().to_string(),
            course: self.course,
            question_type: self.question_type,
            passing_score: self.passing_score,
            max_attempts: self.max_attempts,
            time_limit: self.time_limit,
            total_questions: 0,
            status: AssessmentStatus::Draft,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDraft {
    pub name: String,
    pub kind: RepositoryKind,
    pub resume_enabled: bool,
}

impl Default for UploadDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: RepositoryKind::Video,
            resume_enabled: true,
        }
    }
}

impl UploadDraft {
    pub fn into_item(self, id: String) -> Result<RepositoryItem, ValidationError> {
        require(&self.name, "Content title is required")?;
        Ok(RepositoryItem {
            id,
            name: self.name.trim().to_string(),
            kind: self.kind,
            duration: "0 min".to_string(),
            assigned_courses: Vec::new(),
            resume_enabled: self.resume_enabled,
            size: "0 MB".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_requires_name() {
        let err = GroupDraft::default().into_group("x".into()).unwrap_err();
        assert_eq!(err.message(), "Group name is required");

        let group = GroupDraft {
            name: "Night Shift".into(),
            active: false,
            ..Default::default()
        }
        .into_group("g-1".into())
        .unwrap();
        assert_eq!(group.status, ActiveStatus::Inactive);
        assert_eq!(group.total_users, 0);
    }

    #[test]
    fn new_course_is_draft() {
        let course = CourseDraft {
            name: "Ladder Safety".into(),
            ..Default::default()
        }
        .into_course("c-1".into())
        .unwrap();
        assert_eq!(course.status, CourseStatus::Draft);
        assert_eq!(course.duration, "0 hours");
    }

    #[test]
    fn event_and_assessment_need_course() {
        let event = EventDraft {
            name: "Ladder Demo".into(),
            ..Default::default()
        };
        assert_eq!(
            event.into_event("e".into()).unwrap_err().message(),
            "Event name and course are required"
        );

        let assessment = AssessmentDraft {
            name: "Ladder Quiz".into(),
            course: "Ladder Safety".into(),
            ..Default::default()
        }
        .into_assessment("a".into())
        .unwrap();
        assert_eq!(assessment.status, AssessmentStatus::Draft);
        assert_eq!(assessment.max_attempts, 3);
    }

    #[test]
    fn upload_defaults() {
        let item = UploadDraft {
            name: "Ladder Video".into(),
            ..Default::default()
        }
        .into_item("r".into())
        .unwrap();
        assert_eq!(item.kind, RepositoryKind::Video);
        assert!(item.assigned_courses.is_empty());
        assert!(UploadDraft::default().into_item("r".into()).is_err());
    }
}
