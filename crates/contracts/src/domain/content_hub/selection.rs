//! Four-level cascading selector used by the content explorer.
//!
//! Picking a value at one level clears every deeper level; the option list
//! of a level is the children of the level above it.

use serde::{Deserialize, Serialize};

use super::aggregate::Lesson;
use super::catalog::ContentCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HierarchyLevel {
    OfferType,
    Category,
    SubCategory,
    Module,
}

impl HierarchyLevel {
    pub fn all() -> [HierarchyLevel; 4] {
        [
            HierarchyLevel::OfferType,
            HierarchyLevel::Category,
            HierarchyLevel::SubCategory,
            HierarchyLevel::Module,
        ]
    }

    /// 0-based position from the top of the hierarchy
    pub fn depth(&self) -> usize {
        match self {
            HierarchyLevel::OfferType => 0,
            HierarchyLevel::Category => 1,
            HierarchyLevel::SubCategory => 2,
            HierarchyLevel::Module => 3,
        }
    }

    pub fn parent(&self) -> Option<HierarchyLevel> {
        match self {
            HierarchyLevel::OfferType => None,
            HierarchyLevel::Category => Some(HierarchyLevel::OfferType),
            HierarchyLevel::SubCategory => Some(HierarchyLevel::Category),
            HierarchyLevel::Module => Some(HierarchyLevel::SubCategory),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HierarchyLevel::OfferType => "Offer Type",
            HierarchyLevel::Category => "Category",
            HierarchyLevel::SubCategory => "Sub Category",
            HierarchyLevel::Module => "Module",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Select {}", self.label())
    }
}

/// Id/name pair fed into a select widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}

impl SelectOption {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchySelection {
    pub offer_type: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub module: Option<String>,
}

impl HierarchySelection {
    pub fn get(&self, level: HierarchyLevel) -> Option<&str> {
        self.slot(level).as_deref()
    }

    fn slot(&self, level: HierarchyLevel) -> &Option<String> {
        match level {
            HierarchyLevel::OfferType => &self.offer_type,
            HierarchyLevel::Category => &self.category,
            HierarchyLevel::SubCategory => &self.sub_category,
            HierarchyLevel::Module => &self.module,
        }
    }

    fn slot_mut(&mut self, level: HierarchyLevel) -> &mut Option<String> {
        match level {
            HierarchyLevel::OfferType => &mut self.offer_type,
            HierarchyLevel::Category => &mut self.category,
            HierarchyLevel::SubCategory => &mut self.sub_category,
            HierarchyLevel::Module => &mut self.module,
        }
    }

    /// Sets `level` and clears everything below it. An empty id clears
    /// the level itself too.
    pub fn select(&mut self, level: HierarchyLevel, id: &str) {
        let id = id.trim();
        *self.slot_mut(level) = if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        };

        for deeper in HierarchyLevel::all()
            .into_iter()
            .filter(|l| l.depth() > level.depth())
        {
            *self.slot_mut(deeper) = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        HierarchyLevel::all().iter().all(|l| self.get(*l).is_none())
    }

    /// Children of the parent selection; empty when the parent is unset
    pub fn options(&self, level: HierarchyLevel, catalog: &ContentCatalog) -> Vec<SelectOption> {
        match level {
            HierarchyLevel::OfferType => catalog
                .offer_types
                .iter()
                .map(|o| SelectOption::new(&o.id, &o.name))
                .collect(),
            HierarchyLevel::Category => match self.offer_type.as_deref() {
                Some(id) => catalog
                    .categories_by_offer_type(id)
                    .into_iter()
                    .map(|c| SelectOption::new(&c.id, &c.name))
                    .collect(),
                None => Vec::new(),
            },
            HierarchyLevel::SubCategory => match self.category.as_deref() {
                Some(id) => catalog
                    .sub_categories_by_category(id)
                    .into_iter()
                    .map(|s| SelectOption::new(&s.id, &s.name))
                    .collect(),
                None => Vec::new(),
            },
            HierarchyLevel::Module => match self.sub_category.as_deref() {
                Some(id) => catalog
                    .modules_by_sub_category(id)
                    .into_iter()
                    .map(|m| SelectOption::new(&m.id, &m.name))
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// The top level is always enabled; deeper levels need a selected
    /// parent with at least one child.
    pub fn is_enabled(&self, level: HierarchyLevel, catalog: &ContentCatalog) -> bool {
        match level.parent() {
            None => true,
            Some(parent) => self.get(parent).is_some() && !self.options(level, catalog).is_empty(),
        }
    }

    pub fn lessons<'a>(&self, catalog: &'a ContentCatalog) -> Vec<&'a Lesson> {
        match self.module.as_deref() {
            Some(id) => catalog.lessons_by_module(id),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_selection() -> HierarchySelection {
        let mut sel = HierarchySelection::default();
        sel.select(HierarchyLevel::OfferType, "bt");
        sel.select(HierarchyLevel::Category, "cs");
        sel.select(HierarchyLevel::SubCategory, "ds");
        sel.select(HierarchyLevel::Module, "m1");
        sel
    }

    #[test]
    fn selecting_offer_type_clears_descendants() {
        let mut sel = full_selection();
        sel.select(HierarchyLevel::OfferType, "mt");

        assert_eq!(sel.get(HierarchyLevel::OfferType), Some("mt"));
        assert_eq!(sel.category, None);
        assert_eq!(sel.sub_category, None);
        assert_eq!(sel.module, None);
    }

    #[test]
    fn selecting_middle_level_keeps_ancestors() {
        let mut sel = full_selection();
        sel.select(HierarchyLevel::Category, "ec");

        assert_eq!(sel.offer_type.as_deref(), Some("bt"));
        assert_eq!(sel.category.as_deref(), Some("ec"));
        assert!(sel.sub_category.is_none());
        assert!(sel.module.is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut sel = full_selection();
        sel.reset();
        assert!(sel.is_empty());
    }

    #[test]
    fn options_follow_parent_selection() {
        let catalog = ContentCatalog::global();
        let mut sel = HierarchySelection::default();

        assert_eq!(sel.options(HierarchyLevel::OfferType, catalog).len(), 4);
        assert!(sel.options(HierarchyLevel::Category, catalog).is_empty());
        assert!(!sel.is_enabled(HierarchyLevel::Category, catalog));

        sel.select(HierarchyLevel::OfferType, "bt");
        let names: Vec<String> = sel
            .options(HierarchyLevel::Category, catalog)
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(
            names,
            vec!["Computer Science", "Electronics", "Mechanical", "Civil"]
        );
        assert!(sel.is_enabled(HierarchyLevel::Category, catalog));
    }

    #[test]
    fn childless_selection_disables_next_level() {
        let catalog = ContentCatalog::global();
        let mut sel = HierarchySelection::default();
        sel.select(HierarchyLevel::OfferType, "cert");

        assert!(sel.options(HierarchyLevel::Category, catalog).is_empty());
        assert!(!sel.is_enabled(HierarchyLevel::Category, catalog));
    }

    #[test]
    fn lessons_of_selected_module() {
        let catalog = ContentCatalog::global();
        let sel = full_selection();
        assert_eq!(sel.lessons(catalog).len(), 4);
        assert!(HierarchySelection::default().lessons(catalog).is_empty());
    }

    #[test]
    fn empty_id_clears_level() {
        let mut sel = full_selection();
        sel.select(HierarchyLevel::SubCategory, "");
        assert_eq!(sel.category.as_deref(), Some("cs"));
        assert!(sel.sub_category.is_none());
        assert!(sel.module.is_none());
    }
}
