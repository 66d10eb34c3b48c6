//! Value Object Module
//!
//! Every field parser takes the raw JSON value so that type errors
//! ("must be a number") and range errors are reported per field.

pub mod description;
pub mod price;
pub mod product_id;
pub mod product_name;
pub mod stock;
