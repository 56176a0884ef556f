//! Liveness, readiness and build info, outside the versioned API.

use super::method_not_allowed;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Outcome of asking the repository whether it can serve requests.
enum Readiness {
    Ready,
    StoreDown,
}

impl IntoResponse for Readiness {
    fn into_response(self) -> Response {
        let (code, status, database) = match self {
            Readiness::Ready => (StatusCode::OK, "ok", "ok"),
            Readiness::StoreDown => (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable"),
        };
        (code, Json(json!({ "status": status, "database": database }))).into_response()
    }
}

async fn readiness(State(state): State<AppState>) -> Readiness {
    match state.books.ping().await {
        Ok(()) => Readiness::Ready,
        Err(e) => {
            tracing::warn!(error = %e, "store probe failed");
            Readiness::StoreDown
        }
    }
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok" })) }).fallback(method_not_allowed),
        )
        .route("/ready", get(readiness).fallback(method_not_allowed))
        .route(
            "/version",
            get(|| async {
                Json(json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                }))
            })
            .fallback(method_not_allowed),
        )
        .with_state(state)
}
