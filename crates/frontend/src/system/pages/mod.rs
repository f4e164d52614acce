pub mod index;
pub mod login;
pub mod not_found;
