pub mod date_format;
pub mod error;
pub mod navigation;
pub mod routes;
pub mod search;
pub mod validation;
