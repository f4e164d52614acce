pub mod content_type;
pub mod user_role;

pub use content_type::{ContentSource, ContentType, PublishStatus};
pub use user_role::UserRole;
