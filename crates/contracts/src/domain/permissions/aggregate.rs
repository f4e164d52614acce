use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    View,
    Create,
    Edit,
    Delete,
}

impl Permission {
    pub fn code(&self) -> &'static str {
        match self {
            Permission::View => "view",
            Permission::Create => "create",
            Permission::Edit => "edit",
            Permission::Delete => "delete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Permission::View => "View",
            Permission::Create => "Create",
            Permission::Edit => "Edit",
            Permission::Delete => "Delete",
        }
    }

    /// Tooltip text next to the toggle
    pub fn description(&self) -> &'static str {
        match self {
            Permission::View => "Allow viewing and browsing this module",
            Permission::Create => "Allow creating new items in this module",
            Permission::Edit => "Allow editing existing items in this module",
            Permission::Delete => "Allow permanently deleting items from this module",
        }
    }

    pub fn all() -> [Permission; 4] {
        [
            Permission::View,
            Permission::Create,
            Permission::Edit,
            Permission::Delete,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

/// A system area whose access is controlled per role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionModule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Permissions that make sense for this module, in display order
    pub permissions: Vec<Permission>,
}

impl PermissionModule {
    pub fn supports(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}
