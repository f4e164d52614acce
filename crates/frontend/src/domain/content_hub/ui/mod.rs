//! Content hub pages: the drill-down hierarchy and the explorer

pub mod cards_level;
pub mod categories;
pub mod components;
pub mod explorer;
pub mod landing;
pub mod lessons;
pub mod modules;
pub mod sub_categories;
