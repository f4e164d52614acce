//! Certificate templates bound to a course or an assessment

pub mod aggregate;
pub mod fixtures;
pub mod form;
pub mod list;

pub use aggregate::{
    CertificateContent, CertificateField, CertificateTemplate, CourseOption, GroupedCourseOptions,
    LinkedType, TemplateStatus,
};
pub use form::CertificateForm;
pub use list::CertificateTemplateList;
pub use fixtures::{certificate_by_id, certificate_templates, course_option, course_options, grouped_course_options};
