//! Book CRUD handlers: list, read, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{JsonOrDefault, ValidJson};
use crate::model::{Book, BookIdParam, BookUpdate, NewBook};
use crate::service::RequestValidator;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/api/v1/books",
    responses(
        (status = 200, description = "All stored books", body = [Book]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.books.list().await?;
    tracing::debug!(count = books.len(), "listed books");
    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/{bookId}",
    params(("bookId" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 404, description = "No book with this id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn read(State(state): State<AppState>, BookIdParam(id): BookIdParam) -> Result<Json<Book>, AppError> {
    let Some(id) = id else {
        return Err(AppError::book_not_found());
    };
    let book = state.books.get(id).await?.ok_or_else(AppError::book_not_found)?;
    Ok(Json(book))
}

#[utoipa::path(
    post,
    path = "/api/v1/books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing or invalid fields, or bookId already taken", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<NewBook>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_new(&body)?;
    let book = state.books.insert(body).await.map_err(|e| match e {
        StoreError::Duplicate(id) => {
            tracing::warn!(book_id = id, "create rejected: id taken");
            AppError::BadRequest(e.to_string())
        }
        other => AppError::Store(other),
    })?;
    tracing::info!(book_id = book.book_id, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

/// Reports 204 whether or not a record matched. An empty body changes nothing.
#[utoipa::path(
    put,
    path = "/api/v1/books/{bookId}",
    params(("bookId" = i32, Path, description = "Book id")),
    request_body = BookUpdate,
    responses(
        (status = 204, description = "Update applied"),
        (status = 400, description = "Invalid fields", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    BookIdParam(id): BookIdParam,
    JsonOrDefault(changes): JsonOrDefault<BookUpdate>,
) -> Result<StatusCode, AppError> {
    RequestValidator::validate_update(&changes)?;
    if let Some(id) = id {
        state.books.update(id, changes).await?;
        tracing::info!(book_id = id, "book updated");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Every removal failure, missing record or otherwise, is reported as 404.
#[utoipa::path(
    delete,
    path = "/api/v1/books/{bookId}",
    params(("bookId" = i32, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "No book with this id", body = ErrorBody)
    )
)]
pub async fn delete(State(state): State<AppState>, BookIdParam(id): BookIdParam) -> Result<StatusCode, AppError> {
    let Some(id) = id else {
        return Err(AppError::book_not_found());
    };
    if let Err(e) = state.books.remove(id).await {
        match &e {
            StoreError::NotFound(_) => tracing::debug!(book_id = id, "delete of missing book"),
            _ => tracing::warn!(book_id = id, error = %e, "delete failed"),
        }
        return Err(AppError::book_not_found());
    }
    tracing::info!(book_id = id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
