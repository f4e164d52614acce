use serde::{Deserialize, Serialize};

use crate::enums::{ContentSource, ContentType, PublishStatus};

// ============================================================================
// Common trait
// ============================================================================

/// Shared surface of every level in the content hierarchy
pub trait HierarchyEntity {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Id of the parent record, `None` for the root level
    fn parent_id(&self) -> Option<&str>;

    /// Singular display name, e.g. "Sub Category"
    fn element_name() -> &'static str;

    /// Plural display name, e.g. "Sub Categories"
    fn list_name() -> &'static str;
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferType {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Author-maintained; not recomputed from the category table
    pub category_count: u32,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub offer_type_id: String,
    pub name: String,
    pub description: String,
    pub sub_category_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub module_count: u32,
}

/// A curriculum unit inside a sub-category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub sub_category_id: String,
    pub name: String,
    pub description: String,
    pub lesson_count: u32,
    /// Not guaranteed contiguous or unique
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_template_id: Option<String>,
    #[serde(default)]
    pub source: ContentSource,
    #[serde(default)]
    pub status: PublishStatus,
}

impl HierarchyEntity for OfferType {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn parent_id(&self) -> Option<&str> {
        None
    }
    fn element_name() -> &'static str {
        "Offer Type"
    }
    fn list_name() -> &'static str {
        "Offer Types"
    }
}

impl HierarchyEntity for Category {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn parent_id(&self) -> Option<&str> {
        Some(&self.offer_type_id)
    }
    fn element_name() -> &'static str {
        "Category"
    }
    fn list_name() -> &'static str {
        "Categories"
    }
}

impl HierarchyEntity for SubCategory {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn parent_id(&self) -> Option<&str> {
        Some(&self.category_id)
    }
    fn element_name() -> &'static str {
        "Sub Category"
    }
    fn list_name() -> &'static str {
        "Sub Categories"
    }
}

impl HierarchyEntity for Module {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn parent_id(&self) -> Option<&str> {
        Some(&self.sub_category_id)
    }
    fn element_name() -> &'static str {
        "Module"
    }
    fn list_name() -> &'static str {
        "Modules"
    }
}

impl HierarchyEntity for Lesson {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.title
    }
    fn parent_id(&self) -> Option<&str> {
        Some(&self.module_id)
    }
    fn element_name() -> &'static str {
        "Lesson"
    }
    fn list_name() -> &'static str {
        "Lessons"
    }
}
