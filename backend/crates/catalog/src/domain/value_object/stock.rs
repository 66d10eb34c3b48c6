//! Stock Value Object

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("The stock field is required.")]
    Required,

    #[error("The stock must be an integer.")]
    NotInteger,

    #[error("The stock must be at least 0.")]
    Negative,

    #[error("The stock must not be greater than {}.", i32::MAX)]
    TooLarge,
}

/// Units on hand. Serialized as a JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock(i32);

impl Stock {
    pub fn new(units: i64) -> Result<Self, StockError> {
        if units < 0 {
            return Err(StockError::Negative);
        }
        i32::try_from(units)
            .map(Self)
            .map_err(|_| StockError::TooLarge)
    }

    /// Parse integer text: optional sign followed by digits only
    pub fn parse(text: &str) -> Result<Self, StockError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StockError::Required);
        }

        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StockError::NotInteger);
        }

        match text.parse::<i64>() {
            Ok(units) => Self::new(units),
            // all digits but out of i64 range
            Err(_) if text.starts_with('-') => Err(StockError::Negative),
            Err(_) => Err(StockError::TooLarge),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self, StockError> {
        match value {
            Value::Null => Err(StockError::Required),
            Value::Number(n) => Self::parse(&n.to_string()),
            Value::String(s) => Self::parse(s),
            _ => Err(StockError::NotInteger),
        }
    }

    pub fn from_db(units: i32) -> Self {
        Self(units)
    }

    pub fn units(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
