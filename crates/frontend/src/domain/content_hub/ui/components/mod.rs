pub mod add_content_modal;
pub mod breadcrumb;
pub mod content_card;
pub mod content_table;
pub mod empty_state;
pub mod level_header;
pub mod module_table;
pub mod preview_modal;

pub use add_content_modal::AddContentModal;
pub use breadcrumb::ContentBreadcrumb;
pub use content_card::ContentCardLink;
pub use content_table::{ContentDataTable, ContentTypeLegend, TypeBadge};
pub use empty_state::EmptyPlaceholder;
pub use level_header::LevelHeaderBar;
pub use module_table::ModuleTable;
pub use preview_modal::ContentPreviewModal;
