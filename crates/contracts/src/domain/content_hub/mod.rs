//! Content hierarchy: offer type → category → sub-category → module → lesson

pub mod aggregate;
pub mod breadcrumb;
pub mod catalog;
pub mod content_row;
pub mod fixtures;
pub mod pages;
pub mod selection;

pub use aggregate::{Category, HierarchyEntity, Lesson, Module, OfferType, SubCategory};
pub use breadcrumb::{breadcrumbs_for, BreadcrumbItem, HierarchyNode};
pub use catalog::{CountDrift, ContentCatalog};
pub use content_row::{module_rows_for, rows_for, ContentDraft, ContentRow, ModuleRow};
pub use selection::{HierarchyLevel, HierarchySelection, SelectOption};
pub use pages::{
    route_id, CardsPage, ContentCard, EmptyState, LessonsPage, LevelHeader, ModulesPage, PageOutcome,
};
