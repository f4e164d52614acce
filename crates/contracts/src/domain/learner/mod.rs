//! Learner workspace: trainings, assessments, library, calendar,
//! certificates and dashboard

pub mod aggregate;
pub mod fixtures;
pub mod progress;

pub use aggregate::*;
