//! Dummy data for local development.

use crate::model::NewBook;
use crate::store::{BookRepository, StoreError};

pub fn dummy_books() -> Vec<NewBook> {
    vec![
        NewBook {
            book_id: 1,
            title: "The Hobbit".into(),
            author: "J. R. R. Tolkien".into(),
            description: Some("Someone finds a nice piece of jewellery while on holiday.".into()),
        },
        NewBook {
            book_id: 2,
            title: "The Shop Before Life".into(),
            author: "Neil Hughes".into(),
            description: Some(
                "Before being born, each person must visit the magical Shop Before Life, where they choose what kind of person they will become down on Earth..."
                    .into(),
            ),
        },
    ]
}

/// Insert the dummy books, skipping ids that already exist. Returns how many were inserted.
pub async fn populate_dummy_data(books: &dyn BookRepository) -> Result<usize, StoreError> {
    let mut inserted = 0;
    for book in dummy_books() {
        let id = book.book_id;
        match books.insert(book).await {
            Ok(_) => inserted += 1,
            Err(StoreError::Duplicate(_)) => tracing::debug!(book_id = id, "seed book already present"),
            Err(e) => return Err(e),
        }
    }
    tracing::info!(inserted, "seeded dummy books");
    Ok(inserted)
}
