pub mod editor;
pub mod layout;
pub mod list;
pub mod preview_modal;
