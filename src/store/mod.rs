//! Persistence interface for books and its implementations.

mod memory;
mod postgres;

pub use memory::InMemoryBookRepository;
pub use postgres::{ensure_books_table, ensure_database_exists, PgBookRepository};

use crate::model::{Book, BookUpdate, NewBook};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("book {0} already exists")]
    Duplicate(i32),
    #[error("book {0} does not exist")]
    NotFound(i32),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// CRUD primitives over the book table. Handlers hold this behind `Arc<dyn BookRepository>`.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All stored books. Order is store-defined.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError>;

    /// Fails with `Duplicate` when `bookId` is taken.
    async fn insert(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Applies supplied fields. Does not report whether a row matched.
    async fn update(&self, id: i32, changes: BookUpdate) -> Result<(), StoreError>;

    /// Fails with `NotFound` when no row matched.
    async fn remove(&self, id: i32) -> Result<(), StoreError>;

    /// Cheap liveness probe used by the readiness route.
    async fn ping(&self) -> Result<(), StoreError>;
}
