//! Book CRUD routes, mounted under `/api/v1`.

use super::method_not_allowed;
use crate::handlers::books::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list).post(create).fallback(method_not_allowed))
        .route(
            "/books/:bookId",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
