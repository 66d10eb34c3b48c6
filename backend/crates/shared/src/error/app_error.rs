//! Application Error - Unified error type for the HTTP boundary
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;
use super::validation::ValidationErrors;

/// Message used for every 422 response
pub const VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// アプリケーション統一エラー型
///
/// ## Fields
/// * `kind` - classification, mapped to the HTTP status
/// * `message` - client-facing message
/// * `errors` - per-field messages (422 only)
///
/// Server-side details are logged by the feature crates before conversion
/// and never stored here.
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
/// use kernel::error::validation::ValidationErrors;
///
/// let err = AppError::new(ErrorKind::NotFound, "Product not found");
/// assert_eq!(err.status_code(), 404);
///
/// let err = AppError::validation(ValidationErrors::single("name", "The name field is required."));
/// assert_eq!(err.status_code(), 422);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    errors: Option<ValidationErrors>,
}

/// `Result<T, AppError>` の省略形
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 422 with per-field messages
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            kind: ErrorKind::UnprocessableEntity,
            message: Cow::Borrowed(VALIDATION_MESSAGE),
            errors: Some(errors),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// JSON body sent to the client
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "message": self.message() });
        if let Some(errors) = &self.errors {
            body["errors"] = serde_json::to_value(errors).unwrap_or_default();
        }
        body
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(errors) = &self.errors {
            builder.field("errors", errors);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(errors) = &self.errors {
            let fields: Vec<&str> = errors.fields().collect();
            write!(f, " (fields: {})", fields.join(", "))?;
        }
        Ok(())
    }
}

impl Error for AppError {}
