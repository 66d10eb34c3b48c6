//! Request extractors whose rejections render as [`AppError`] bodies.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::app_error::AppError;
use crate::error::kind::ErrorKind;

/// Drop-in replacement for [`axum::Json`] that answers malformed bodies
/// with the same `{"message": ...}` shape as every other error.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(rejection_to_app_error(rejection)),
        }
    }
}

fn rejection_to_app_error(rejection: JsonRejection) -> AppError {
    let kind = match &rejection {
        JsonRejection::MissingJsonContentType(_) => ErrorKind::UnsupportedMediaType,
        JsonRejection::JsonDataError(_) => ErrorKind::UnprocessableEntity,
        _ => ErrorKind::BadRequest,
    };
    AppError::new(kind, rejection.body_text())
}
