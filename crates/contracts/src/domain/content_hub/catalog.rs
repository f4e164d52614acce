use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::aggregate::{Category, HierarchyEntity, Lesson, Module, OfferType, SubCategory};
use super::fixtures;

static CATALOG: Lazy<ContentCatalog> = Lazy::new(ContentCatalog::fixtures);

/// Read-only view over the content hierarchy tables.
///
/// Every lookup is a linear scan in table order. Unknown ids yield `None`
/// or an empty vector, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    pub offer_types: Vec<OfferType>,
    pub categories: Vec<Category>,
    pub sub_categories: Vec<SubCategory>,
    pub modules: Vec<Module>,
    pub lessons: Vec<Lesson>,
}

/// A parent whose author-maintained child count disagrees with the tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountDrift {
    pub entity: &'static str,
    pub id: String,
    pub declared: u32,
    pub actual: u32,
}

impl std::fmt::Display for CountDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' declares {} children, found {}",
            self.entity, self.id, self.declared, self.actual
        )
    }
}

impl ContentCatalog {
    /// Builds a fresh catalog from the demo fixtures
    pub fn fixtures() -> Self {
        Self {
            offer_types: fixtures::offer_types(),
            categories: fixtures::categories(),
            sub_categories: fixtures::sub_categories(),
            modules: fixtures::modules(),
            lessons: fixtures::lessons(),
        }
    }

    /// Process-wide fixture catalog, built on first access
    pub fn global() -> &'static ContentCatalog {
        &CATALOG
    }

    pub fn offer_type(&self, id: &str) -> Option<&OfferType> {
        self.offer_types.iter().find(|o| o.id == id)
    }

    pub fn categories_by_offer_type(&self, offer_type_id: &str) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.offer_type_id == offer_type_id)
            .collect()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn sub_categories_by_category(&self, category_id: &str) -> Vec<&SubCategory> {
        self.sub_categories
            .iter()
            .filter(|s| s.category_id == category_id)
            .collect()
    }

    pub fn sub_category(&self, id: &str) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|s| s.id == id)
    }

    pub fn modules_by_sub_category(&self, sub_category_id: &str) -> Vec<&Module> {
        self.modules
            .iter()
            .filter(|m| m.sub_category_id == sub_category_id)
            .collect()
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn lessons_by_module(&self, module_id: &str) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|l| l.module_id == module_id)
            .collect()
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// Compares every declared `*_count` with the real number of children.
    /// Nothing is rewritten; the caller decides what to do with the report.
    pub fn count_drift(&self) -> Vec<CountDrift> {
        let mut out = Vec::new();

        for o in &self.offer_types {
            push_drift(
                &mut out,
                OfferType::element_name(),
                &o.id,
                o.category_count,
                self.categories_by_offer_type(&o.id).len(),
            );
        }
        for c in &self.categories {
            push_drift(
                &mut out,
                Category::element_name(),
                &c.id,
                c.sub_category_count,
                self.sub_categories_by_category(&c.id).len(),
            );
        }
        for s in &self.sub_categories {
            push_drift(
                &mut out,
                SubCategory::element_name(),
                &s.id,
                s.module_count,
                self.modules_by_sub_category(&s.id).len(),
            );
        }
        for m in &self.modules {
            push_drift(
                &mut out,
                Module::element_name(),
                &m.id,
                m.lesson_count,
                self.lessons_by_module(&m.id).len(),
            );
        }

        out
    }
}

fn push_drift(out: &mut Vec<CountDrift>, entity: &'static str, id: &str, declared: u32, actual: usize) {
    let actual = actual as u32;
    if declared != actual {
        out.push(CountDrift {
            entity,
            id: id.to_string(),
            declared,
            actual,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ContentType;

    #[test]
    fn categories_follow_offer_type_in_source_order() {
        let catalog = ContentCatalog::global();
        for offer in &catalog.offer_types {
            let expected: Vec<&Category> = catalog
                .categories
                .iter()
                .filter(|c| c.offer_type_id == offer.id)
                .collect();
            assert_eq!(catalog.categories_by_offer_type(&offer.id), expected);
        }

        let ids: Vec<&str> = catalog
            .categories_by_offer_type("bt")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["cs", "ec", "me", "cv"]);
    }

    #[test]
    fn lessons_of_first_module() {
        let catalog = ContentCatalog::global();
        let lessons = catalog.lessons_by_module("m1");
        let got: Vec<(&str, ContentType)> = lessons
            .iter()
            .map(|l| (l.id.as_str(), l.content_type))
            .collect();
        assert_eq!(
            got,
            vec![
                ("l1", ContentType::Video),
                ("l2", ContentType::Video),
                ("l3", ContentType::Pdf),
                ("l4", ContentType::Quiz),
            ]
        );
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        let catalog = ContentCatalog::global();
        assert!(catalog.offer_type("nope").is_none());
        assert!(catalog.category("NONEXISTENT").is_none());
        assert!(catalog.sub_categories_by_category("NONEXISTENT").is_empty());
        assert!(catalog.lessons_by_module("m99").is_empty());
    }

    #[test]
    fn count_drift_is_reported_not_fixed() {
        let catalog = ContentCatalog::fixtures();
        let drift = catalog.count_drift();

        // cert and diploma declare categories but have none
        assert!(drift
            .iter()
            .any(|d| d.id == "cert" && d.declared == 6 && d.actual == 0));
        // m2 declares five lessons, four exist
        assert!(drift
            .iter()
            .any(|d| d.entity == "Module" && d.id == "m2" && d.declared == 5 && d.actual == 4));
        // bt is consistent
        assert!(!drift.iter().any(|d| d.id == "bt"));

        assert_eq!(catalog.offer_type("cert").map(|o| o.category_count), Some(6));
    }

    #[test]
    fn catalog_serializes_camel_case() {
        let json = serde_json::to_value(ContentCatalog::global()).unwrap();
        assert_eq!(json["categories"][0]["offerTypeId"], "bt");
        assert_eq!(json["lessons"][0]["certificateTemplateId"], "cert-1");
    }
}
