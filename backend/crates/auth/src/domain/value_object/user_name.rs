//! User Name Value Object
//!
//! The display name given at registration. Free-form text; only presence
//! and length are enforced.
//!
//! ## 不変条件
//! - 前後の空白は除去される
//! - 空文字は不可
//! - 長さ: 最大255文字（コードポイント単位）

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("The name field is required.")]
    Required,

    #[error("The name must not be greater than {USER_NAME_MAX_LENGTH} characters.")]
    TooLong,
}

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl Into<String>) -> Result<Self, UserNameError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Required);
        }

        if trimmed.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
