use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::aggregate::{
    CertificateContent, CertificateTemplate, CourseOption, GroupedCourseOptions, LinkedType,
    TemplateStatus,
};

static COURSE_OPTIONS: Lazy<Vec<CourseOption>> = Lazy::new(|| {
    let opt = |id: &str, name: &str, kind| CourseOption {
        id: id.into(),
        name: name.into(),
        kind,
    };
    vec![
        opt("course-1", "LV Switchboard Application & Offer Selection", LinkedType::Course),
        opt("course-2", "Advanced Data Structures", LinkedType::Course),
        opt("course-3", "Machine Learning Fundamentals", LinkedType::Course),
        opt("assessment-1", "JavaScript Certification Exam", LinkedType::Assessment),
        opt("assessment-2", "Python Developer Assessment", LinkedType::Assessment),
        opt("assessment-3", "Cloud Architecture Assessment", LinkedType::Assessment),
    ]
});

static TEMPLATES: Lazy<Vec<CertificateTemplate>> = Lazy::new(|| {
    vec![
        CertificateTemplate {
            id: "cert-1".into(),
            name: "LV Switchboard Completion Certificate".into(),
            linked_type: LinkedType::Course,
            linked_item_id: "course-1".into(),
            linked_item_name: "LV Switchboard Application & Offer Selection".into(),
            status: TemplateStatus::Active,
            created_at: date(2025, 1, 10),
            updated_at: date(2025, 1, 12),
            content: content(
                "This certification acknowledges successful completion of training within Schneider Electric. \
                 You are welcome to share your certificate in accordance with our social media policy.",
                "#WhatDidYouLearnToday?",
                "Schneider Electric",
            ),
        },
        CertificateTemplate {
            id: "cert-2".into(),
            name: "JavaScript Certification".into(),
            linked_type: LinkedType::Assessment,
            linked_item_id: "assessment-1".into(),
            linked_item_name: "JavaScript Certification Exam".into(),
            status: TemplateStatus::Active,
            created_at: date(2025, 1, 8),
            updated_at: date(2025, 1, 8),
            content: content(
                "This certification acknowledges successful completion of the JavaScript assessment. \
                 You are welcome to share your certificate in accordance with our social media policy.",
                "#CodeWithConfidence",
                "Tech Academy",
            ),
        },
        CertificateTemplate {
            id: "cert-3".into(),
            name: "ML Fundamentals Certificate".into(),
            linked_type: LinkedType::Course,
            linked_item_id: "course-3".into(),
            linked_item_name: "Machine Learning Fundamentals".into(),
            status: TemplateStatus::Inactive,
            created_at: date(2025, 1, 5),
            updated_at: date(2025, 1, 7),
            content: content(
                "This certification acknowledges successful completion of Machine Learning training. \
                 Share your achievement with pride.",
                "#MLMaster",
                "AI Institute",
            ),
        },
    ]
});

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn content(description: &str, hashtag: &str, organization: &str) -> CertificateContent {
    CertificateContent {
        description_text: description.into(),
        hashtag: hashtag.into(),
        organization_name: organization.into(),
        ..CertificateContent::default()
    }
}

pub fn certificate_templates() -> &'static [CertificateTemplate] {
    &TEMPLATES
}

pub fn certificate_by_id(id: &str) -> Option<&'static CertificateTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn course_options() -> &'static [CourseOption] {
    &COURSE_OPTIONS
}

pub fn course_option(id: &str) -> Option<&'static CourseOption> {
    COURSE_OPTIONS.iter().find(|o| o.id == id)
}

pub fn grouped_course_options() -> GroupedCourseOptions {
    let (courses, assessments) = COURSE_OPTIONS
        .iter()
        .cloned()
        .partition(|o| o.kind == LinkedType::Course);
    GroupedCourseOptions {
        courses,
        assessments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_match_demo_data() {
        assert_eq!(certificate_templates().len(), 3);
        assert_eq!(course_options().len(), 6);

        let cert = certificate_by_id("cert-2").unwrap();
        assert_eq!(cert.linked_type, LinkedType::Assessment);
        assert_eq!(cert.content.title, "Certificate");
        assert_eq!(cert.content.organization_name, "Tech Academy");
        assert!(certificate_by_id("cert-9").is_none());
    }

    #[test]
    fn options_are_grouped_by_kind() {
        let grouped = grouped_course_options();
        assert_eq!(grouped.courses.len(), 3);
        assert_eq!(grouped.assessments.len(), 3);
        assert!(grouped
            .assessments
            .iter()
            .all(|o| o.kind == LinkedType::Assessment));
        assert_eq!(
            grouped.find("assessment-2").map(|o| o.name.as_str()),
            Some("Python Developer Assessment")
        );
    }

    #[test]
    fn linked_items_exist() {
        for t in certificate_templates() {
            let option = course_option(&t.linked_item_id).unwrap();
            assert_eq!(option.name, t.linked_item_name);
            assert_eq!(option.kind, t.linked_type);
        }
    }
}
