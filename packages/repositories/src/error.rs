use sea_orm::DbErr;
use services::{ValidationErrors, ValidationErrorsExt};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched, or the row exists but visitors may not see it. The two
    /// cases are never told apart.
    #[error("not found")]
    NotFound,
    #[error("invalid input: {}", .0.to_message())]
    Validation(ValidationErrors),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }

    pub(crate) fn field(field: &str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_error(field, message.to_string());
        RepositoryError::Validation(errors)
    }
}

impl From<ValidationErrors> for RepositoryError {
    fn from(errors: ValidationErrors) -> Self {
        RepositoryError::Validation(errors)
    }
}
