pub mod badge;
pub mod progress;

pub use badge::{CountBadge, StatusPill};
pub use progress::ProgressMeter;
