use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    #[error("The description field is required.")]
    Required,

    #[error("The description must be a string.")]
    NotString,
}

/// Free-form product description, no length limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn new(raw: &str) -> Result<Self, DescriptionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DescriptionError::Required);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_json(value: &Value) -> Result<Self, DescriptionError> {
        match value {
            Value::Null => Err(DescriptionError::Required),
            Value::String(s) => Self::new(s),
            _ => Err(DescriptionError::NotString),
        }
    }

    pub fn from_db(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
