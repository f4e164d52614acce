use thiserror::Error;

use super::validation::ValidationError;

/// Errors a page can raise while rendering. Lookup misses are not errors:
/// they resolve to "not found" placeholders instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("render failed: {0}")]
    Render(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_readable() {
        let err = AppError::not_found("Certificate template", "cert-9");
        assert_eq!(err.to_string(), "Certificate template 'cert-9' not found");

        let err: AppError = ValidationError::Required("Please enter a template name").into();
        assert_eq!(err.to_string(), "Please enter a template name");
    }
}
