use contracts::enums::UserRole;
use leptos::prelude::*;

/// Demo sign-in state. Nothing is persisted or checked against a backend.
#[derive(Clone, Copy)]
pub struct RoleContext {
    role: RwSignal<Option<UserRole>>,
    user_name: RwSignal<String>,
}

impl RoleContext {
    pub fn new() -> Self {
        let role = UserRole::Trainer;
        Self {
            role: RwSignal::new(Some(role)),
            user_name: RwSignal::new(role.default_user_name().to_string()),
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role.get()
    }

    pub fn set_role(&self, role: Option<UserRole>) {
        log::info!(
            "role changed to {}",
            role.map(|r| r.code()).unwrap_or("signed out")
        );
        self.role.set(role);
    }

    pub fn user_name(&self) -> String {
        self.user_name.get()
    }

    pub fn set_user_name(&self, name: impl Into<String>) {
        self.user_name.set(name.into());
    }

    /// Signs in as `role` with its demo display name
    pub fn login(&self, role: UserRole) {
        self.set_role(Some(role));
        self.set_user_name(role.default_user_name());
    }

    pub fn logout(&self) {
        self.set_role(None);
    }

    /// Initials for the avatar bubble
    pub fn initials(&self) -> String {
        self.user_name
            .get()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

impl Default for RoleContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_role() -> RoleContext {
    use_context::<RoleContext>().expect("RoleContext not found in component tree")
}
