//! Trainer workspace: groups, learners, courses, events, attendance,
//! assessments, reports, feedback, issued certificates, content repository

pub mod aggregate;
pub mod dashboard;
pub mod filters;
pub mod fixtures;
pub mod forms;

pub use aggregate::*;
