pub mod filter_panel;
pub mod page_header;
pub mod stat_card;
pub mod ui;
