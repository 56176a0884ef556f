//! Extract the `{bookId}` path segment.

use crate::model::BookIdParam;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[async_trait]
impl<S> FromRequestParts<S> for BookIdParam
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => BookIdParam::parse(&segment),
            Err(_) => BookIdParam(None),
        };
        Ok(id)
    }
}
