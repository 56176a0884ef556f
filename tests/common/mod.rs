//! Shared harness for API tests: in-process router plus purpose-built repositories.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bookshelf::model::{Book, BookUpdate, NewBook};
use bookshelf::routes::DEFAULT_BODY_LIMIT;
use bookshelf::store::{BookRepository, InMemoryBookRepository, StoreError};
use bookshelf::{app, AppState};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub fn dummy_books() -> Vec<Book> {
    bookshelf::seed::dummy_books().into_iter().map(NewBook::into_book).collect()
}

pub fn router_with(repo: Arc<dyn BookRepository>) -> Router {
    app(AppState::new(repo), DEFAULT_BODY_LIMIT)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}

pub async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(router, request).await
}

/// Send a raw body with explicit headers, e.g. to set `Content-Length` or omit the content type.
pub async fn send_raw(
    router: Router,
    method: Method,
    uri: &str,
    headers: &[(header::HeaderName, String)],
    body: impl Into<Body>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    send_request(router, builder.body(body.into()).unwrap()).await
}

async fn send_request(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse { status, body }
}

// =============================================================================
// RecordingRepo: in-memory store that remembers which calls reached it
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Insert(i32),
    Update(i32, BookUpdate),
    Remove(i32),
}

pub struct RecordingRepo {
    inner: InMemoryBookRepository,
    calls: Mutex<Vec<Call>>,
}

impl RecordingRepo {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            inner: InMemoryBookRepository::with_books(books),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BookRepository for RecordingRepo {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.inner.list().await
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError> {
        self.inner.get(id).await
    }

    async fn insert(&self, book: NewBook) -> Result<Book, StoreError> {
        self.record(Call::Insert(book.book_id));
        self.inner.insert(book).await
    }

    async fn update(&self, id: i32, changes: BookUpdate) -> Result<(), StoreError> {
        self.record(Call::Update(id, changes.clone()));
        self.inner.update(id, changes).await
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        self.record(Call::Remove(id));
        self.inner.remove(id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// =============================================================================
// BrokenRepo: every call fails as if the database were gone
// =============================================================================

pub struct BrokenRepo;

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl BookRepository for BrokenRepo {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Err(down())
    }

    async fn get(&self, _id: i32) -> Result<Option<Book>, StoreError> {
        Err(down())
    }

    async fn insert(&self, _book: NewBook) -> Result<Book, StoreError> {
        Err(down())
    }

    async fn update(&self, _id: i32, _changes: BookUpdate) -> Result<(), StoreError> {
        Err(down())
    }

    async fn remove(&self, _id: i32) -> Result<(), StoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}
