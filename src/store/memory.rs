//! In-memory book store, used in the `test` environment.

use super::{BookRepository, StoreError};
use crate::model::{Book, BookUpdate, NewBook};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<BTreeMap<i32, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books = books.into_iter().map(|b| (b.book_id, b)).collect();
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn insert(&self, book: NewBook) -> Result<Book, StoreError> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.book_id) {
            return Err(StoreError::Duplicate(book.book_id));
        }
        let book = book.into_book();
        books.insert(book.book_id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, changes: BookUpdate) -> Result<(), StoreError> {
        if let Some(book) = self.books.write().await.get_mut(&id) {
            changes.apply_to(book);
        }
        Ok(())
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        self.books
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbit() -> NewBook {
        NewBook {
            book_id: 1,
            title: "The Hobbit".into(),
            author: "J. R. R. Tolkien".into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn insert_rejects_taken_id() {
        let repo = InMemoryBookRepository::new();
        repo.insert(hobbit()).await.unwrap();
        let err = repo.insert(hobbit()).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(1)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_a_no_op() {
        let repo = InMemoryBookRepository::new();
        let changes = BookUpdate {
            title: Some("New Title".into()),
            ..Default::default()
        };
        repo.update(42, changes).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_twice_reports_not_found() {
        let repo = InMemoryBookRepository::new();
        repo.insert(hobbit()).await.unwrap();
        repo.remove(1).await.unwrap();
        assert!(matches!(repo.remove(1).await, Err(StoreError::NotFound(1))));
        assert_eq!(repo.get(1).await.unwrap(), None);
    }
}
