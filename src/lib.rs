//! Bookshelf: REST CRUD over a single book resource.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StoreBackend};
pub use error::{AppError, ConfigError};
pub use model::{Book, BookUpdate, NewBook};
pub use routes::{app, book_routes, common_routes};
pub use seed::populate_dummy_data;
pub use state::AppState;
pub use store::{BookRepository, InMemoryBookRepository, PgBookRepository, StoreError};
