use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkedType {
    Course,
    Assessment,
}

impl LinkedType {
    pub fn code(&self) -> &'static str {
        match self {
            LinkedType::Course => "course",
            LinkedType::Assessment => "assessment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LinkedType::Course => "Course",
            LinkedType::Assessment => "Assessment",
        }
    }

    /// Heading of the option group in the link selector
    pub fn group_label(&self) -> &'static str {
        match self {
            LinkedType::Course => "Courses",
            LinkedType::Assessment => "Assessments",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    Active,
    Inactive,
}

impl TemplateStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateStatus::Active => "Active",
            TemplateStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TemplateStatus::Active)
    }
}

/// Editable text blocks printed on the certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateContent {
    pub title: String,
    pub subtitle: String,
    pub recognition_text: String,
    pub description_text: String,
    pub hashtag: String,
    pub organization_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_logo: Option<String>,
}

impl Default for CertificateContent {
    /// Starting layout of a new template
    fn default() -> Self {
        Self {
            title: "Certificate".into(),
            subtitle: "This certificate is proudly presented to".into(),
            recognition_text: "In Recognition of Achievement In".into(),
            description_text: "This certification acknowledges successful completion of training. \
                You are welcome to share your certificate in accordance with our social media policy."
                .into(),
            hashtag: "#WhatDidYouLearnToday?".into(),
            organization_name: "Your Organization".into(),
            organization_logo: None,
        }
    }
}

/// Addressable text field of [`CertificateContent`] for inline editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateField {
    Title,
    Subtitle,
    RecognitionText,
    DescriptionText,
    Hashtag,
    OrganizationName,
}

impl CertificateField {
    pub fn all() -> [CertificateField; 6] {
        [
            CertificateField::Title,
            CertificateField::Subtitle,
            CertificateField::RecognitionText,
            CertificateField::DescriptionText,
            CertificateField::Hashtag,
            CertificateField::OrganizationName,
        ]
    }

    /// Rendered as a textarea instead of a single-line input
    pub fn multiline(&self) -> bool {
        matches!(self, CertificateField::DescriptionText)
    }
}

impl CertificateContent {
    pub fn get(&self, field: CertificateField) -> &str {
        match field {
            CertificateField::Title => &self.title,
            CertificateField::Subtitle => &self.subtitle,
            CertificateField::RecognitionText => &self.recognition_text,
            CertificateField::DescriptionText => &self.description_text,
            CertificateField::Hashtag => &self.hashtag,
            CertificateField::OrganizationName => &self.organization_name,
        }
    }

    pub fn set(&mut self, field: CertificateField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CertificateField::Title => self.title = value,
            CertificateField::Subtitle => self.subtitle = value,
            CertificateField::RecognitionText => self.recognition_text = value,
            CertificateField::DescriptionText => self.description_text = value,
            CertificateField::Hashtag => self.hashtag = value,
            CertificateField::OrganizationName => self.organization_name = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateTemplate {
    pub id: String,
    pub name: String,
    pub linked_type: LinkedType,
    pub linked_item_id: String,
    pub linked_item_name: String,
    pub status: TemplateStatus,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub content: CertificateContent,
}

/// A course or assessment a template can be linked to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOption {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LinkedType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedCourseOptions {
    pub courses: Vec<CourseOption>,
    pub assessments: Vec<CourseOption>,
}

impl GroupedCourseOptions {
    pub fn find(&self, id: &str) -> Option<&CourseOption> {
        self.courses
            .iter()
            .chain(self.assessments.iter())
            .find(|o| o.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessors_round_trip() {
        let mut content = CertificateContent::default();
        for field in CertificateField::all() {
            content.set(field, format!("{:?}!", field));
            assert_eq!(content.get(field), format!("{:?}!", field));
        }
        assert!(CertificateField::DescriptionText.multiline());
        assert!(!CertificateField::Hashtag.multiline());
    }

    #[test]
    fn option_kind_serializes_as_type() {
        let opt = CourseOption {
            id: "course-2".into(),
            name: "Advanced Data Structures".into(),
            kind: LinkedType::Course,
        };
        let json = serde_json::to_value(&opt).unwrap();
        assert_eq!(json["type"], "course");
    }
}
