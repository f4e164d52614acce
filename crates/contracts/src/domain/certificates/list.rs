use super::aggregate::CertificateTemplate;
use super::fixtures::certificate_templates;

/// Page-local copy of the template table. Mutations never reach the
/// fixtures, so a fresh list always starts from the original rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateTemplateList {
    templates: Vec<CertificateTemplate>,
}

impl CertificateTemplateList {
    pub fn from_fixtures() -> Self {
        Self {
            templates: certificate_templates().to_vec(),
        }
    }

    pub fn templates(&self) -> &[CertificateTemplate] {
        &self.templates
    }

    pub fn find(&self, id: &str) -> Option<&CertificateTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Removes and returns the template, `None` if it is not listed
    pub fn delete(&mut self, id: &str) -> Option<CertificateTemplate> {
        let idx = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_is_local_to_the_list() {
        let mut list = CertificateTemplateList::from_fixtures();
        let removed = list.delete("cert-2").unwrap();
        assert_eq!(removed.name, "JavaScript Certification");
        assert_eq!(list.len(), 2);
        assert!(list.find("cert-2").is_none());

        // a remount starts from the fixtures again
        let reloaded = CertificateTemplateList::from_fixtures();
        assert_eq!(reloaded.len(), 3);
        assert!(reloaded.find("cert-2").is_some());
    }

    #[test]
    fn deleting_unknown_id_is_a_noop() {
        let mut list = CertificateTemplateList::from_fixtures();
        assert!(list.delete("cert-42").is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_can_become_empty() {
        let mut list = CertificateTemplateList::from_fixtures();
        for id in ["cert-1", "cert-2", "cert-3"] {
            list.delete(id);
        }
        assert!(list.is_empty());
    }
}
