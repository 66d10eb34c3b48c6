//! Product Name Value Object

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Maximum length for product name (in characters)
pub const PRODUCT_NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductNameError {
    #[error("The name field is required.")]
    Required,

    #[error("The name must be a string.")]
    NotString,

    #[error("The name must not be greater than {PRODUCT_NAME_MAX_LENGTH} characters.")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(raw: &str) -> Result<Self, ProductNameError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ProductNameError::Required);
        }

        if trimmed.chars().count() > PRODUCT_NAME_MAX_LENGTH {
            return Err(ProductNameError::TooLong);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn from_json(value: &Value) -> Result<Self, ProductNameError> {
        match value {
            Value::Null => Err(ProductNameError::Required),
            Value::String(s) => Self::new(s),
            _ => Err(ProductNameError::NotString),
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
