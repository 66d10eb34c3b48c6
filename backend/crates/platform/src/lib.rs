//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Token signing primitives (HMAC-SHA256, URL-safe Base64, random keys)
//! - Password hashing (Argon2id)
//! - Bearer credential extraction from request headers

pub mod bearer;
pub mod crypto;
pub mod password;
