//! Router assembly.

mod books;
mod common;

pub use books::book_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Default cap on request bodies.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

async fn no_route() -> AppError {
    AppError::NotFound("Not found".into())
}

/// Per-route fallback for a known path hit with an unsupported method.
pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// The full application: common routes, OpenAPI document, and `/api/v1/books`.
/// Body size is enforced by the body extractors, so oversize requests get the JSON error shape.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(openapi_routes())
        .nest("/api/v1", book_routes(state))
        .fallback(no_route)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
