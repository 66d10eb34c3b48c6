//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind, validation::ValidationErrors};
use platform::password::PasswordHashError;
use thiserror::Error;
use tracing::Level;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more input fields failed validation
    #[error("The given data was invalid.")]
    Validation(ValidationErrors),

    /// Email already registered
    #[error("The email has already been taken.")]
    EmailTaken,

    /// Unknown email or wrong password. Both causes look the same to the client.
    #[error("Unauthorized")]
    InvalidCredentials,

    /// Missing, unknown, revoked or expired bearer token
    #[error("Unauthenticated.")]
    Unauthenticated,

    /// Logout without a live token
    #[error("User not logged in")]
    NotLoggedIn,

    /// Authenticated but lacking the required role
    #[error("Forbidden")]
    Forbidden,

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::EmailTaken => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::InvalidCredentials | AuthError::Unauthenticated | AuthError::NotLoggedIn => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::EmailTaken => ErrorKind::UnprocessableEntity,
            AuthError::InvalidCredentials | AuthError::Unauthenticated | AuthError::NotLoggedIn => {
                ErrorKind::Unauthorized
            }
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server-side details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(errors) => AppError::validation(errors.clone()),
            AuthError::EmailTaken => {
                AppError::validation(ValidationErrors::single("email", self.to_string()))
            }
            e if e.kind().is_server_error() => AppError::internal("Internal server error"),
            e => AppError::new(e.kind(), e.to_string()),
        }
    }

    /// Log level: server faults at `error`, rejected credentials and
    /// permissions at `warn`, everything else at `debug`
    pub fn log_level(&self) -> Level {
        match self {
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                Level::ERROR
            }
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated
            | AuthError::NotLoggedIn
            | AuthError::Forbidden => Level::WARN,
            AuthError::Validation(_) | AuthError::EmailTaken => Level::DEBUG,
        }
    }

    fn log(&self) {
        let level = self.log_level();
        if level == Level::ERROR {
            tracing::error!(error = %self, "Auth server error");
        } else if level == Level::WARN {
            tracing::warn!(error = %self, "Auth request rejected");
        } else {
            tracing::debug!(error = %self, "Auth error");
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}
