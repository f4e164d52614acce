pub mod certificates;
pub mod content_hub;
pub mod learner;
pub mod permissions;
pub mod trainer;
