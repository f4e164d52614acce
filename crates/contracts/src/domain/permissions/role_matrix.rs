use std::collections::BTreeMap;

use super::aggregate::{Permission, PermissionModule};
use super::fixtures::{default_grants, permission_module, permission_modules};
use crate::shared::validation::{require, ValidationError};

pub const BUILT_IN_ROLES: [&str; 3] = ["admin", "trainer", "user"];

/// How much of a module a role can do, drives the count badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Full,
    Partial,
    None,
}

/// Per-module grants of one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionMatrix {
    pub role: String,
    grants: BTreeMap<&'static str, Vec<Permission>>,
}

impl RolePermissionMatrix {
    pub fn defaults(role: &str) -> Self {
        let grants = default_grants(role).into_iter().collect();
        Self {
            role: role.to_string(),
            grants,
        }
    }

    pub fn granted(&self, module_id: &str) -> &[Permission] {
        self.grants.get(module_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_enabled(&self, module_id: &str, permission: Permission) -> bool {
        self.granted(module_id).contains(&permission)
    }

    /// Flips one permission. Permissions the module does not offer, and
    /// unknown modules, are left untouched; returns the new state.
    pub fn toggle(&mut self, module_id: &str, permission: Permission) -> bool {
        let Some(module) = permission_module(module_id) else {
            return false;
        };
        if !module.supports(permission) {
            return false;
        }

        let current = self.grants.entry(module.id).or_default();
        if let Some(idx) = current.iter().position(|p| *p == permission) {
            current.remove(idx);
            false
        } else {
            current.push(permission);
            true
        }
    }

    pub fn enabled_count(&self, module_id: &str) -> usize {
        self.granted(module_id).len()
    }

    pub fn access_level(&self, module: &PermissionModule) -> AccessLevel {
        let enabled = self.enabled_count(module.id);
        if enabled == module.permissions.len() {
            AccessLevel::Full
        } else if enabled > 0 {
            AccessLevel::Partial
        } else {
            AccessLevel::None
        }
    }

    /// "2/4" badge text
    pub fn count_label(&self, module: &PermissionModule) -> String {
        format!("{}/{}", self.enabled_count(module.id), module.permissions.len())
    }

    pub fn modules() -> &'static [PermissionModule] {
        permission_modules()
    }
}

/// Roles offered by the role selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDirectory {
    roles: Vec<String>,
}

impl Default for RoleDirectory {
    fn default() -> Self {
        Self {
            roles: BUILT_IN_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl RoleDirectory {
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Adds a role with no grants. The name is trimmed and lower-cased to
    /// form the role key.
    pub fn create_role(&mut self, name: &str) -> Result<String, ValidationError> {
        require(name, "Please enter a role name")?;
        let key = name.trim().to_lowercase();
        if self.roles.contains(&key) {
            return Err(ValidationError::Invalid("A role with this name already exists"));
        }
        self.roles.push(key.clone());
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_has_everything() {
        let matrix = RolePermissionMatrix::defaults("admin");
        for module in RolePermissionMatrix::modules() {
            assert_eq!(matrix.access_level(module), AccessLevel::Full);
        }
    }

    #[test]
    fn trainer_defaults() {
        let matrix = RolePermissionMatrix::defaults("trainer");
        assert_eq!(
            matrix.granted("events"),
            &[Permission::View, Permission::Create, Permission::Edit]
        );
        let settings = permission_module("settings").unwrap();
        assert_eq!(matrix.count_label(settings), "1/2");
        assert_eq!(matrix.access_level(settings), AccessLevel::Partial);
    }

    #[test]
    fn user_has_no_reports() {
        let matrix = RolePermissionMatrix::defaults("user");
        let reports = permission_module("reports").unwrap();
        assert_eq!(matrix.access_level(reports), AccessLevel::None);
        assert_eq!(matrix.enabled_count("reports"), 0);
    }

    #[test]
    fn toggle_respects_module_offer() {
        let mut matrix = RolePermissionMatrix::defaults("user");
        assert!(matrix.toggle("reports", Permission::View));
        assert!(matrix.is_enabled("reports", Permission::View));
        assert!(!matrix.toggle("reports", Permission::View));
        assert!(!matrix.is_enabled("reports", Permission::View));

        // dashboard only offers view
        assert!(!matrix.toggle("dashboard", Permission::Delete));
        assert!(!matrix.is_enabled("dashboard", Permission::Delete));
        assert!(!matrix.toggle("unknown", Permission::View));
    }

    #[test]
    fn created_roles_start_empty() {
        let mut dir = RoleDirectory::default();
        assert!(dir.create_role("   ").is_err());
        let key = dir.create_role(" Auditor ").unwrap();
        assert_eq!(key, "auditor");
        assert_eq!(dir.roles().len(), 4);
        assert!(dir.create_role("auditor").is_err());

        let matrix = RolePermissionMatrix::defaults(&key);
        assert_eq!(matrix.enabled_count("dashboard"), 0);
    }
}
