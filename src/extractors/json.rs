//! JSON body extractors whose rejections render with a `message` body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a missing content type, unparsable JSON, or a body that
/// does not match `T` becomes `AppError::BadRequest`. Bodies over the configured
/// `DefaultBodyLimit` become `AppError::PayloadTooLarge`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

/// Same rules as `ValidJson`, except an empty body (with or without a content type)
/// reads as `T::default()`.
#[derive(Debug, Clone)]
pub struct JsonOrDefault<T>(pub T);

fn rejected(status: StatusCode, reason: String) -> AppError {
    tracing::debug!(%status, reason = %reason, "rejected request body");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("request body exceeds the size limit".into())
    } else {
        AppError::BadRequest(reason)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(rejected(rejection.status(), rejection.body_text())),
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrDefault<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonOrDefault(T::default()));
        }
        if !json_content {
            return Err(rejected(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected request with `Content-Type: application/json`".into(),
            ));
        }
        serde_json::from_slice(&bytes)
            .map(JsonOrDefault)
            .map_err(|e| rejected(StatusCode::BAD_REQUEST, format!("Failed to parse the request body: {}", e)))
    }
}
