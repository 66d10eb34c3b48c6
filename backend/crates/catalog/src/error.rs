//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind, validation::ValidationErrors};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more product fields failed validation
    #[error("The given data was invalid.")]
    Validation(ValidationErrors),

    /// Unknown or malformed product id
    #[error("Product not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::UnprocessableEntity,
            CatalogError::NotFound => ErrorKind::NotFound,
            CatalogError::Database(_) | CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Server-side details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Validation(errors) => AppError::validation(errors.clone()),
            CatalogError::NotFound => AppError::not_found(self.to_string()),
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                AppError::internal("Internal server error")
            }
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        CatalogError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let err = CatalogError::NotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_app_error().message(), "Product not found");
    }

    #[test]
    fn test_validation_carries_fields() {
        let err = CatalogError::from(ValidationErrors::single("price", "The price must be a number."));
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 422);
        assert_eq!(app.message(), "The given data was invalid.");
        assert!(app.errors().unwrap().has("price"));
    }

    #[test]
    fn test_internal_hidden() {
        let err = CatalogError::Internal("secret detail".into());
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
