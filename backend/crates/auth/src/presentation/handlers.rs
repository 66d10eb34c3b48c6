//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::extract::AppJson;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::application::{LoginUseCase, LogoutUseCase, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    UserInfoResponse, UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, I>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    I: TokenIssuer + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub issuer: Arc<I>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
///
/// A body that is not a JSON object is treated as an empty form, so the
/// client gets the usual per-field errors.
pub async fn register<R, I>(
    State(state): State<AuthAppState<R, I>>,
    body: Result<AppJson<RegisterRequest>, AppError>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    I: TokenIssuer + Clone + Send + Sync + 'static,
{
    let req = body.map(|AppJson(req)| req).unwrap_or_default();

    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.issuer.clone(), state.config.clone());

    let output = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully",
            access_token: output.token.token,
            user: UserResponse::from(&output.user),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R, I>(
    State(state): State<AuthAppState<R, I>>,
    body: Result<AppJson<LoginRequest>, AppError>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    I: TokenIssuer + Clone + Send + Sync + 'static,
{
    // unparseable bodies fail exactly like wrong credentials
    let req = body.map(|AppJson(req)| req).unwrap_or_default();

    let use_case = LoginUseCase::new(state.repo.clone(), state.issuer.clone(), state.config.clone());

    let output = use_case.execute(req.into()).await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        access_token: output.token.token,
        role: output.user.user_role,
    }))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout<R, I>(
    State(state): State<AuthAppState<R, I>>,
    headers: HeaderMap,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    I: TokenIssuer + Clone + Send + Sync + 'static,
{
    let token = platform::bearer::extract_bearer_token(&headers);

    LogoutUseCase::new(state.issuer.clone())
        .execute(token.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: "User logged out successfully",
    }))
}

// ============================================================================
// User Info
// ============================================================================

/// GET /userInfo
pub async fn user_info(CurrentUser(user): CurrentUser) -> Json<UserInfoResponse> {
    Json(UserInfoResponse {
        user: UserResponse::from(&user),
    })
}
