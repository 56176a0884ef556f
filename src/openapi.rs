//! OpenAPI document for the book API.

use crate::error::ErrorBody;
use crate::handlers::books;
use crate::model::{Book, BookUpdate, NewBook};
use crate::routes::method_not_allowed;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "bookshelf", description = "CRUD over the book resource"),
    paths(books::list, books::read, books::create, books::update, books::delete),
    components(schemas(Book, NewBook, BookUpdate, ErrorBody))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json
pub fn openapi_routes() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(openapi_json).fallback(method_not_allowed),
    )
}
