use serde::{Deserialize, Serialize};

use super::catalog::ContentCatalog;
use crate::shared::routes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub path: String,
}

impl BreadcrumbItem {
    fn new(label: &str, path: String) -> Self {
        Self {
            label: label.to_string(),
            path,
        }
    }
}

/// Deepest resolved entity a breadcrumb trail starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyNode {
    OfferType(String),
    Category(String),
    SubCategory(String),
    Module(String),
    Lesson(String),
}

/// Walks parent references up from `leaf` and returns the trail in
/// top-down order. Lessons resolve to their module's trail.
///
/// Returns `None` if the leaf or any ancestor is missing.
pub fn breadcrumbs_for(catalog: &ContentCatalog, leaf: &HierarchyNode) -> Option<Vec<BreadcrumbItem>> {
    match leaf {
        HierarchyNode::OfferType(id) => {
            let offer = catalog.offer_type(id)?;
            Some(vec![BreadcrumbItem::new(
                &offer.name,
                routes::offer_type_categories(&offer.id),
            )])
        }
        HierarchyNode::Category(id) => {
            let category = catalog.category(id)?;
            let mut trail =
                breadcrumbs_for(catalog, &HierarchyNode::OfferType(category.offer_type_id.clone()))?;
            trail.push(BreadcrumbItem::new(
                &category.name,
                routes::category_sub_categories(&category.id),
            ));
            Some(trail)
        }
        HierarchyNode::SubCategory(id) => {
            let sub = catalog.sub_category(id)?;
            let mut trail =
                breadcrumbs_for(catalog, &HierarchyNode::Category(sub.category_id.clone()))?;
            trail.push(BreadcrumbItem::new(
                &sub.name,
                routes::sub_category_modules(&sub.id),
            ));
            Some(trail)
        }
        HierarchyNode::Module(id) => {
            let module = catalog.module(id)?;
            let mut trail =
                breadcrumbs_for(catalog, &HierarchyNode::SubCategory(module.sub_category_id.clone()))?;
            trail.push(BreadcrumbItem::new(
                &module.name,
                routes::module_lessons(&module.id),
            ));
            Some(trail)
        }
        HierarchyNode::Lesson(id) => {
            let lesson = catalog.lesson(id)?;
            breadcrumbs_for(catalog, &HierarchyNode::Module(lesson.module_id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_resolves_to_four_items() {
        let catalog = ContentCatalog::global();
        let trail = breadcrumbs_for(catalog, &HierarchyNode::Lesson("l5".into())).unwrap();

        let labels: Vec<&str> = trail.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["B.Tech", "Computer Science", "Data Structures", "Linked Lists"]
        );
        assert_eq!(trail[3].path, "/content-hub/modules/m2/lessons");
    }

    #[test]
    fn depth_matches_hierarchy_level() {
        let catalog = ContentCatalog::global();
        let cases = [
            (HierarchyNode::OfferType("bt".into()), 1),
            (HierarchyNode::Category("ec".into()), 2),
            (HierarchyNode::SubCategory("dig".into()), 3),
            (HierarchyNode::Module("m14".into()), 4),
        ];
        for (node, depth) in cases {
            assert_eq!(breadcrumbs_for(catalog, &node).map(|t| t.len()), Some(depth));
        }
    }

    #[test]
    fn dangling_reference_yields_none() {
        let mut catalog = ContentCatalog::fixtures();
        catalog.categories[0].offer_type_id = "gone".into();

        assert!(breadcrumbs_for(&catalog, &HierarchyNode::SubCategory("ds".into())).is_none());
        assert!(breadcrumbs_for(&catalog, &HierarchyNode::Module("missing".into())).is_none());
    }
}
