use thiserror::Error;

/// Client-side form validation failure. The message is shown verbatim in
/// an error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Required(&'static str),

    #[error("{0}")]
    Invalid(&'static str),
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Required(m) | ValidationError::Invalid(m) => m,
        }
    }
}

/// Fails with `Required(message)` when `value` is blank after trimming
pub fn require(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(message))
    } else {
        Ok(())
    }
}

/// Demo sign-in form: both fields must be present
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::Required("Please enter email and password"));
    }
    Ok(())
}

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_password_change(new_password: &str, confirm: &str) -> Result<(), ValidationError> {
    if new_password != confirm {
        return Err(ValidationError::Invalid("New passwords do not match"));
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::Invalid(
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_whitespace() {
        assert!(require("  ", "Group name is required").is_err());
        assert!(require("Safety Team B", "Group name is required").is_ok());
    }

    #[test]
    fn login_needs_both_fields() {
        assert_eq!(
            validate_login("a@b.c", "").unwrap_err().message(),
            "Please enter email and password"
        );
        assert!(validate_login("a@b.c", "secret").is_ok());
    }

    #[test]
    fn password_change_checks_match_before_length() {
        assert_eq!(
            validate_password_change("short", "other").unwrap_err().message(),
            "New passwords do not match"
        );
        assert_eq!(
            validate_password_change("short", "short").unwrap_err().message(),
            "Password must be at least 8 characters"
        );
        assert!(validate_password_change("long-enough", "long-enough").is_ok());
    }
}
