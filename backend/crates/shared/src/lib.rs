//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Field-level validation error bags
//! - Typed ID wrappers
//!
//! Feature crates (`auth`, `catalog`) convert their own errors into
//! [`error::app_error::AppError`] at the HTTP boundary.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    pub mod validation;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
