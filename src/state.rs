//! Shared application state for all routes.

use crate::store::BookRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected at startup; handlers never reach for a global store.
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }
}
