//! Crate-wide error type.
//!
//! Rule violations are carried as [`ValidationError`]; lookups that miss and
//! storage failures get their own variants so callers can tell a rejected
//! input from a broken database.

use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error category.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Structured context for the error, suitable for JSON output.
    pub fn details(&self) -> Value {
        match self {
            AppError::Validation(err) => err.details(),
            AppError::NotFound { details, .. } | AppError::Internal { details, .. } => {
                details.clone()
            }
        }
    }

    /// Returns the validation error if this is a rule violation.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Maps a database error that no repository handled explicitly.
///
/// Constraint violations the domain knows about (duplicate author names) are
/// translated by the repositories before reaching this point.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        tracing::error!(
            error = %db,
            constraint = ?db.constraint(),
            "Unhandled database constraint error"
        );
        return AppError::internal(
            "Database constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_code_and_message() {
        let err: AppError = ValidationError::InvalidPhoneNumber.into();

        assert_eq!(err.code(), "validation_error");
        assert_eq!(err.to_string(), "Phone number must be exactly 10 digits");
        assert_eq!(err.details()["field"], "phone_number");
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::InvalidPhoneNumber)
        );
    }

    #[test]
    fn test_not_found_details() {
        let err = AppError::not_found("Author not found", json!({ "id": 42 }));

        assert_eq!(err.code(), "not_found");
        assert_eq!(err.to_string(), "Author not found");
        assert_eq!(err.details()["id"], 42);
        assert!(err.as_validation().is_none());
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();

        assert_eq!(err.code(), "internal_error");
        assert_eq!(err.to_string(), "Database error");
    }
}
