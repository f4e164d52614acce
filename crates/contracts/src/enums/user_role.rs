use serde::{Deserialize, Serialize};

/// Persona the console is rendered for. "Signed out" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Trainer,
    User,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Trainer => "trainer",
            UserRole::User => "user",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Trainer => "Trainer",
            UserRole::User => "User",
        }
    }

    /// Landing path of the role's route subtree
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Trainer => "/trainer",
            UserRole::User => "/user",
        }
    }

    /// Name shown in the header after a demo sign-in
    pub fn default_user_name(&self) -> &'static str {
        match self {
            UserRole::Trainer => "John Trainer",
            UserRole::User => "Jane Learner",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "trainer" => Some(UserRole::Trainer),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_has_its_own_subtree() {
        assert_eq!(UserRole::Trainer.home_path(), "/trainer");
        assert_eq!(UserRole::User.home_path(), "/user");
        assert_eq!(UserRole::from_code("admin"), None);
    }
}
