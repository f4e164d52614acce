use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::aggregate::Permission;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub user_id: String,
}

impl UserProfile {
    /// "Sai Kumar" -> "SK"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Role-derived grants of one module for a specific user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGrant {
    pub module: String,
    pub inherited: Vec<Permission>,
    pub available: Vec<Permission>,
}

impl ModuleGrant {
    /// Available permissions the role does not already give
    pub fn grantable(&self) -> Vec<Permission> {
        self.available
            .iter()
            .copied()
            .filter(|p| !self.inherited.contains(p))
            .collect()
    }
}

/// Individual additions and removals on top of the role grants
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserOverrides {
    granted: HashMap<String, Vec<Permission>>,
    restricted: HashMap<String, Vec<Permission>>,
}

fn toggle_in(map: &mut HashMap<String, Vec<Permission>>, module: &str, permission: Permission) -> bool {
    let current = map.entry(module.to_string()).or_default();
    if let Some(idx) = current.iter().position(|p| *p == permission) {
        current.remove(idx);
        false
    } else {
        current.push(permission);
        true
    }
}

impl UserOverrides {
    /// Only non-inherited available permissions can be granted
    pub fn toggle_grant(&mut self, grant: &ModuleGrant, permission: Permission) -> bool {
        if !grant.grantable().contains(&permission) {
            return false;
        }
        toggle_in(&mut self.granted, &grant.module, permission)
    }

    /// Only inherited permissions can be restricted
    pub fn toggle_restrict(&mut self, grant: &ModuleGrant, permission: Permission) -> bool {
        if !grant.inherited.contains(&permission) {
            return false;
        }
        toggle_in(&mut self.restricted, &grant.module, permission)
    }

    pub fn is_granted(&self, module: &str, permission: Permission) -> bool {
        self.granted
            .get(module)
            .is_some_and(|v| v.contains(&permission))
    }

    pub fn is_restricted(&self, module: &str, permission: Permission) -> bool {
        self.restricted
            .get(module)
            .is_some_and(|v| v.contains(&permission))
    }

    /// `(inherited - restricted)` followed by granted extras not already present
    pub fn effective(&self, grant: &ModuleGrant) -> Vec<Permission> {
        let mut out: Vec<Permission> = grant
            .inherited
            .iter()
            .copied()
            .filter(|p| !self.is_restricted(&grant.module, *p))
            .collect();

        if let Some(extras) = self.granted.get(&grant.module) {
            for p in extras {
                if !out.contains(p) {
                    out.push(*p);
                }
            }
        }
        out
    }

    pub fn has_changes(&self) -> bool {
        self.granted.values().any(|v| !v.is_empty()) || self.restricted.values().any(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::permissions::fixtures::{demo_user, demo_user_grants};

    fn grant(module: &str) -> ModuleGrant {
        demo_user_grants()
            .into_iter()
            .find(|g| g.module == module)
            .unwrap()
    }

    #[test]
    fn effective_applies_restrictions_then_extras() {
        let category = grant("Category Management");
        let mut overrides = UserOverrides::default();

        assert!(overrides.toggle_restrict(&category, Permission::Create));
        assert!(overrides.toggle_grant(&category, Permission::Delete));

        assert_eq!(
            overrides.effective(&category),
            vec![Permission::View, Permission::Delete]
        );
        assert!(overrides.has_changes());
    }

    #[test]
    fn cannot_grant_inherited_or_unavailable() {
        let dashboard = grant("Dashboard");
        let mut overrides = UserOverrides::default();

        assert!(!overrides.toggle_grant(&dashboard, Permission::View));
        assert!(!overrides.toggle_grant(&dashboard, Permission::Edit));
        assert_eq!(overrides.effective(&dashboard), vec![Permission::View]);
    }

    #[test]
    fn cannot_restrict_what_is_not_inherited() {
        let reports = grant("Reports");
        let mut overrides = UserOverrides::default();
        assert!(!overrides.toggle_restrict(&reports, Permission::Delete));
        assert!(!overrides.has_changes());
    }

    #[test]
    fn toggling_twice_restores_role_grants() {
        let events = grant("Events & Calendar");
        let mut overrides = UserOverrides::default();
        overrides.toggle_restrict(&events, Permission::Edit);
        overrides.toggle_restrict(&events, Permission::Edit);
        assert_eq!(overrides.effective(&events), events.inherited);
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(demo_user().initials(), "SK");
    }
}
