use super::aggregate::{CertificateContent, CertificateField, CertificateTemplate, CourseOption};
use super::fixtures::course_option;
use crate::shared::validation::{require, ValidationError};

/// State of the create/edit template page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateForm {
    pub name: String,
    pub linked: Option<CourseOption>,
    pub content: CertificateContent,
}

impl CertificateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_template(template: &CertificateTemplate) -> Self {
        Self {
            name: template.name.clone(),
            linked: course_option(&template.linked_item_id).cloned(),
            content: template.content.clone(),
        }
    }

    /// Unknown ids clear the selection
    pub fn select_linked(&mut self, option_id: &str) {
        self.linked = course_option(option_id).cloned();
    }

    pub fn set_field(&mut self, field: CertificateField, value: impl Into<String>) {
        self.content.set(field, value);
    }

    /// Name shown on the certificate banner
    pub fn course_name_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.linked
            .as_ref()
            .map(|o| o.name.as_str())
            .unwrap_or(placeholder)
    }

    pub fn validate(&self) -> Result<&CourseOption, ValidationError> {
        require(&self.name, "Please enter a template name")?;
        self.linked
            .as_ref()
            .ok_or(ValidationError::Required("Please select a course or assessment"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::certificates::fixtures::certificate_by_id;

    #[test]
    fn name_is_checked_before_link() {
        let mut form = CertificateForm::new();
        assert_eq!(
            form.validate().unwrap_err().message(),
            "Please enter a template name"
        );

        form.name = "Python Badge".into();
        assert_eq!(
            form.validate().unwrap_err().message(),
            "Please select a course or assessment"
        );

        form.select_linked("assessment-2");
        assert_eq!(form.validate().unwrap().name, "Python Developer Assessment");
    }

    #[test]
    fn new_form_uses_default_layout() {
        let form = CertificateForm::new();
        assert_eq!(form.content.organization_name, "Your Organization");
        assert_eq!(form.course_name_or("Course Name"), "Course Name");
    }

    #[test]
    fn edit_form_is_prefilled() {
        let template = certificate_by_id("cert-1").unwrap();
        let mut form = CertificateForm::from_template(template);
        assert_eq!(form.linked.as_ref().map(|o| o.id.as_str()), Some("course-1"));
        assert!(form.validate().is_ok());

        form.set_field(CertificateField::Hashtag, "#Switchboards");
        assert_eq!(form.content.hashtag, "#Switchboards");

        form.select_linked("nope");
        assert!(form.linked.is_none());
    }
}
