//! Price Value Object
//!
//! Exact decimal amount. Accepts a JSON number or a numeric string and keeps
//! the scale it was given, so `"19.90"` is stored and echoed as `"19.90"`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Largest scale a `Decimal` can hold
const MAX_SCALE: i64 = 28;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("The price field is required.")]
    Required,

    #[error("The price must be a number.")]
    NotNumeric,

    #[error("The price must be at least 0.")]
    Negative,

    /// Well-formed, but not representable without rounding
    #[error("The price is out of the supported range.")]
    OutOfRange,
}

/// Serialized as a decimal string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse numeric text: plain decimal (`"12.50"`) or scientific (`"1.5e2"`)
    ///
    /// The amount is kept exactly as written. Input that a `Decimal` cannot
    /// hold without rounding (more than 28 fractional digits, or beyond 96
    /// bits) is `OutOfRange`.
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PriceError::Required);
        }

        let (mantissa, exponent) = split_numeric(text).ok_or(PriceError::NotNumeric)?;
        let mantissa = Decimal::from_str_exact(mantissa).map_err(|_| PriceError::OutOfRange)?;

        Self::new(scale_exact(mantissa, exponent)?)
    }

    pub fn from_json(value: &Value) -> Result<Self, PriceError> {
        match value {
            Value::Null => Err(PriceError::Required),
            Value::Number(n) => Self::parse(&n.to_string()),
            Value::String(s) => Self::parse(s),
            _ => Err(PriceError::NotNumeric),
        }
    }

    pub fn from_db(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

/// Split `[+-]digits[.digits][(e|E)[+-]digits]` into mantissa text and
/// exponent; `None` for anything else
fn split_numeric(text: &str) -> Option<(&str, i64)> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };

    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }

    let exponent = match exponent {
        None => 0,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if !all_digits(digits) {
                return None;
            }
            // absurd exponents are well-formed but can never be exact
            exp.parse().unwrap_or(if exp.starts_with('-') { i64::MIN } else { i64::MAX })
        }
    };

    Some((mantissa, exponent))
}

/// Multiply by `10^exponent` without losing a digit
fn scale_exact(mantissa: Decimal, exponent: i64) -> Result<Decimal, PriceError> {
    let mut digits = mantissa.mantissa();
    let mut scale = i64::from(mantissa.scale()).saturating_sub(exponent);

    // trailing zeros can absorb extra scale: 1.0e-28 is 1e-28
    while scale > MAX_SCALE && digits % 10 == 0 && digits != 0 {
        digits /= 10;
        scale -= 1;
    }
    if scale > MAX_SCALE {
        if digits == 0 {
            return Ok(Decimal::ZERO);
        }
        return Err(PriceError::OutOfRange);
    }

    if scale < 0 {
        let factor = u32::try_from(-scale)
            .ok()
            .and_then(|exp| 10i128.checked_pow(exp))
            .ok_or(PriceError::OutOfRange)?;
        digits = digits.checked_mul(factor).ok_or(PriceError::OutOfRange)?;
        scale = 0;
    }

    // scale is within 0..=28 here
    Decimal::try_from_i128_with_scale(digits, scale as u32).map_err(|_| PriceError::OutOfRange)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
