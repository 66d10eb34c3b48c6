//! API DTOs (Data Transfer Objects)
//!
//! Request fields are loosely typed so that a missing or mistyped field
//! becomes a field-level validation error instead of a body rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{LoginInput, RegisterInput};
use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

/// Only JSON strings count as a supplied text field
fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

// ============================================================================
// Register
// ============================================================================

/// Register request. Unknown fields (e.g. `role`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
    #[serde(default)]
    pub password_confirmation: Option<Value>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        RegisterInput {
            name: text(req.name),
            email: text(req.email),
            password: text(req.password),
            password_confirmation: text(req.password_confirmation),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub access_token: String,
    pub user: UserResponse,
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        LoginInput {
            email: text(req.email),
            password: text(req.password),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub access_token: String,
    pub role: UserRole,
}

// ============================================================================
// User Info
// ============================================================================

/// Public view of a user. The password hash is never part of it.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.user_id.to_string(),
            name: user.user_name.to_string(),
            email: user.email.to_string(),
            role: user.user_role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub user: UserResponse,
}

// ============================================================================
// Generic
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
