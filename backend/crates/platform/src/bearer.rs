//! Bearer credential extraction
//!
//! Access tokens travel in `Authorization: Bearer <token>`.

use axum::http::{HeaderMap, header};

const BEARER_SCHEME: &str = "bearer";

/// Extract the bearer token from the `Authorization` header
///
/// The scheme is matched case-insensitively. Returns `None` when the header
/// is missing, not valid ASCII, uses another scheme, or carries an empty
/// token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
