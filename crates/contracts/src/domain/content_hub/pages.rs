//! Route params → view-models for the content hub hierarchy pages.
//!
//! Missing ids never fail: they resolve to `PageOutcome::NotFound` and the
//! page renders the placeholder instead.

use serde::Serialize;

use super::aggregate::{Category, HierarchyEntity, Lesson, Module, OfferType, SubCategory};
use super::breadcrumb::{breadcrumbs_for, BreadcrumbItem, HierarchyNode};
use super::catalog::ContentCatalog;
use super::content_row::{module_rows_for, rows_for, ContentRow, ModuleRow};
use crate::shared::error::AppError;
use crate::shared::routes;
use crate::shared::validation::require;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
}

impl EmptyState {
    fn not_found<E: HierarchyEntity>() -> Self {
        Self {
            title: format!("{} Not Found", E::element_name()),
            description: format!(
                "The {} you're looking for doesn't exist.",
                E::element_name().to_lowercase()
            ),
        }
    }

    fn no_children<C: HierarchyEntity>(parent_name: &str) -> Self {
        Self {
            title: format!("No {} Yet", C::list_name()),
            description: format!(
                "Start by adding your first {} to {}.",
                C::element_name().to_lowercase(),
                parent_name
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelHeader {
    pub title: String,
    pub subtitle: String,
    pub count: usize,
    pub count_label: &'static str,
    pub add_label: String,
    pub show_back: bool,
}

impl LevelHeader {
    fn for_children<C: HierarchyEntity>(title: String, subtitle: &str, count: usize) -> Self {
        Self {
            title,
            subtitle: subtitle.to_string(),
            count,
            count_label: C::list_name(),
            add_label: format!("Add {}", C::element_name()),
            show_back: true,
        }
    }
}

/// Navigable card for one child record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Author-maintained count, displayed as-is
    pub count: u32,
    pub count_label: &'static str,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardsPage {
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub header: LevelHeader,
    pub cards: Vec<ContentCard>,
    pub empty: EmptyState,
}

/// Sub-category level: a module table above the navigation cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulesPage {
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub header: LevelHeader,
    pub rows: Vec<ModuleRow>,
    pub cards: Vec<ContentCard>,
    pub empty: EmptyState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonsPage {
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub header: LevelHeader,
    pub rows: Vec<ContentRow>,
    pub empty: EmptyState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PageOutcome<T> {
    Resolved(T),
    NotFound(EmptyState),
}

impl<T> PageOutcome<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageOutcome::NotFound(_))
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            PageOutcome::Resolved(page) => Some(page),
            PageOutcome::NotFound(_) => None,
        }
    }
}

/// Id taken from a route segment. A blank segment is a malformed address,
/// unlike an unknown id which resolves to `NotFound`.
pub fn route_id(raw: Option<String>) -> Result<String, AppError> {
    let id = raw.unwrap_or_default();
    require(&id, "The address is missing a content id")?;
    Ok(id.trim().to_string())
}

// ============================================================================
// Pages
// ============================================================================

/// `/content-hub`
pub fn landing_page(catalog: &ContentCatalog) -> CardsPage {
    let cards = catalog
        .offer_types
        .iter()
        .map(|o| ContentCard {
            id: o.id.clone(),
            title: o.name.clone(),
            description: o.description.clone(),
            count: o.category_count,
            count_label: Category::list_name(),
            icon: Some(o.icon.clone()),
            color: Some(o.color.clone()),
            path: routes::offer_type_categories(&o.id),
        })
        .collect::<Vec<_>>();

    CardsPage {
        breadcrumbs: Vec::new(),
        header: LevelHeader {
            title: "Content Hub".to_string(),
            subtitle: "Manage your learning content hierarchy".to_string(),
            count: cards.len(),
            count_label: OfferType::list_name(),
            add_label: format!("Add {}", OfferType::element_name()),
            show_back: false,
        },
        cards,
        empty: EmptyState::no_children::<OfferType>("the content hub"),
    }
}

/// `/content-hub/:offerId/categories`
pub fn categories_page(catalog: &ContentCatalog, offer_type_id: &str) -> PageOutcome<CardsPage> {
    let (Some(offer), Some(breadcrumbs)) = (
        catalog.offer_type(offer_type_id),
        breadcrumbs_for(catalog, &HierarchyNode::OfferType(offer_type_id.to_string())),
    ) else {
        return PageOutcome::NotFound(EmptyState::not_found::<OfferType>());
    };

    let cards: Vec<ContentCard> = catalog
        .categories_by_offer_type(&offer.id)
        .into_iter()
        .map(|c| ContentCard {
            id: c.id.clone(),
            title: c.name.clone(),
            description: c.description.clone(),
            count: c.sub_category_count,
            count_label: SubCategory::list_name(),
            icon: None,
            color: None,
            path: routes::category_sub_categories(&c.id),
        })
        .collect();

    PageOutcome::Resolved(CardsPage {
        breadcrumbs,
        header: LevelHeader::for_children::<Category>(
            format!("{} {}", offer.name, Category::list_name()),
            &offer.description,
            cards.len(),
        ),
        cards,
        empty: EmptyState::no_children::<Category>(&offer.name),
    })
}

/// `/content-hub/categories/:categoryId/sub-categories`
pub fn sub_categories_page(catalog: &ContentCatalog, category_id: &str) -> PageOutcome<CardsPage> {
    let (Some(category), Some(breadcrumbs)) = (
        catalog.category(category_id),
        breadcrumbs_for(catalog, &HierarchyNode::Category(category_id.to_string())),
    ) else {
        return PageOutcome::NotFound(EmptyState::not_found::<Category>());
    };

    let cards: Vec<ContentCard> = catalog
        .sub_categories_by_category(&category.id)
        .into_iter()
        .map(|s| ContentCard {
            id: s.id.clone(),
            title: s.name.clone(),
            description: s.description.clone(),
            count: s.module_count,
            count_label: Module::list_name(),
            icon: None,
            color: None,
            path: routes::sub_category_modules(&s.id),
        })
        .collect();

    PageOutcome::Resolved(CardsPage {
        breadcrumbs,
        header: LevelHeader::for_children::<SubCategory>(
            format!("{} {}", category.name, SubCategory::list_name()),
            &category.description,
            cards.len(),
        ),
        cards,
        empty: EmptyState::no_children::<SubCategory>(&category.name),
    })
}

/// `/content-hub/sub-categories/:subCategoryId/modules`
pub fn modules_page(catalog: &ContentCatalog, sub_category_id: &str) -> PageOutcome<ModulesPage> {
    let (Some(sub), Some(breadcrumbs)) = (
        catalog.sub_category(sub_category_id),
        breadcrumbs_for(catalog, &HierarchyNode::SubCategory(sub_category_id.to_string())),
    ) else {
        return PageOutcome::NotFound(EmptyState::not_found::<SubCategory>());
    };

    let modules = catalog.modules_by_sub_category(&sub.id);
    let cards: Vec<ContentCard> = modules
        .iter()
        .map(|m| ContentCard {
            id: m.id.clone(),
            title: m.name.clone(),
            description: m.description.clone(),
            count: m.lesson_count,
            count_label: Lesson::list_name(),
            icon: None,
            color: None,
            path: routes::module_lessons(&m.id),
        })
        .collect();

    PageOutcome::Resolved(ModulesPage {
        breadcrumbs,
        header: LevelHeader::for_children::<Module>(
            format!("{} {}", sub.name, Module::list_name()),
            &sub.description,
            cards.len(),
        ),
        rows: module_rows_for(&modules),
        cards,
        empty: EmptyState::no_children::<Module>(&sub.name),
    })
}

/// `/content-hub/modules/:moduleId/lessons`
pub fn lessons_page(catalog: &ContentCatalog, module_id: &str) -> PageOutcome<LessonsPage> {
    let (Some(module), Some(breadcrumbs)) = (
        catalog.module(module_id),
        breadcrumbs_for(catalog, &HierarchyNode::Module(module_id.to_string())),
    ) else {
        return PageOutcome::NotFound(EmptyState::not_found::<Module>());
    };

    let rows = rows_for(&catalog.lessons_by_module(&module.id));

    PageOutcome::Resolved(LessonsPage {
        breadcrumbs,
        header: LevelHeader::for_children::<Lesson>(
            format!("{} {}", module.name, Lesson::list_name()),
            &module.description,
            rows.len(),
        ),
        rows,
        empty: EmptyState::no_children::<Lesson>(&module.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_renders_not_found() {
        let outcome = sub_categories_page(ContentCatalog::global(), "NONEXISTENT");
        match outcome {
            PageOutcome::NotFound(empty) => {
                assert_eq!(empty.title, "Category Not Found");
                assert_eq!(
                    empty.description,
                    "The category you're looking for doesn't exist."
                );
            }
            PageOutcome::Resolved(_) => panic!("expected not found"),
        }
    }

    #[test]
    fn not_found_titles_per_level() {
        let catalog = ContentCatalog::global();
        let title = |o: PageOutcome<CardsPage>| match o {
            PageOutcome::NotFound(e) => e.title,
            PageOutcome::Resolved(_) => String::new(),
        };
        assert_eq!(title(categories_page(catalog, "x")), "Offer Type Not Found");
        match modules_page(catalog, "x") {
            PageOutcome::NotFound(e) => assert_eq!(e.title, "Sub Category Not Found"),
            PageOutcome::Resolved(_) => panic!("expected not found"),
        }
        match lessons_page(catalog, "x") {
            PageOutcome::NotFound(e) => assert_eq!(e.title, "Module Not Found"),
            PageOutcome::Resolved(_) => panic!("expected not found"),
        }
    }

    #[test]
    fn categories_page_for_btech() {
        let page = categories_page(ContentCatalog::global(), "bt")
            .resolved()
            .unwrap();
        assert_eq!(page.header.title, "B.Tech Categories");
        assert_eq!(page.header.count, 4);
        assert_eq!(page.header.count_label, "Categories");
        assert_eq!(page.header.add_label, "Add Category");
        assert_eq!(page.breadcrumbs.len(), 1);
        assert_eq!(page.cards[0].path, "/content-hub/categories/cs/sub-categories");
    }

    #[test]
    fn childless_parent_gets_empty_state() {
        let page = categories_page(ContentCatalog::global(), "diploma")
            .resolved()
            .unwrap();
        assert!(page.cards.is_empty());
        assert_eq!(page.empty.title, "No Categories Yet");
        assert_eq!(
            page.empty.description,
            "Start by adding your first category to Diploma."
        );
        // declared count is shown as authored
        let landing = landing_page(ContentCatalog::global());
        let diploma = landing.cards.iter().find(|c| c.id == "diploma").unwrap();
        assert_eq!(diploma.count, 2);
    }

    #[test]
    fn lessons_page_has_full_trail() {
        let page = lessons_page(ContentCatalog::global(), "m1")
            .resolved()
            .unwrap();
        assert_eq!(page.breadcrumbs.len(), 4);
        assert_eq!(page.header.title, "Arrays Lessons");
        assert_eq!(page.rows.len(), 4);
    }

    #[test]
    fn module_without_lessons() {
        let page = lessons_page(ContentCatalog::global(), "m9")
            .resolved()
            .unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.empty.title, "No Lessons Yet");
    }

    #[test]
    fn modules_page_has_table_and_cards() {
        let page = modules_page(ContentCatalog::global(), "ds")
            .resolved()
            .unwrap();
        assert_eq!(page.header.title, "Data Structures Modules");
        assert_eq!(page.breadcrumbs.len(), 3);
        let ids: Vec<&str> = page.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m2", "m3", "m4"]);
        assert_eq!(page.rows[0].description, "Array fundamentals");
        assert_eq!(page.cards.len(), page.rows.len());
        assert_eq!(page.cards[0].path, "/content-hub/modules/m1/lessons");
    }

    #[test]
    fn blank_route_id_is_validation_error() {
        let err = route_id(Some("  ".into())).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "The address is missing a content id");
        assert!(route_id(None).is_err());
        assert_eq!(route_id(Some("ds".into())), Ok("ds".to_string()));
    }
}
