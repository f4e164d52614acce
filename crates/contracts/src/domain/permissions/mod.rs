//! Admin permission management: role matrices and per-user overrides

pub mod aggregate;
pub mod fixtures;
pub mod role_matrix;
pub mod user_overrides;

pub use aggregate::{Permission, PermissionModule};
pub use role_matrix::{AccessLevel, RoleDirectory, RolePermissionMatrix};
pub use user_overrides::{ModuleGrant, UserOverrides, UserProfile};
