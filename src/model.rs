//! Book resource types: stored record, create payload, partial update payload.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A stored book. `bookId` is supplied by the caller, never generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
}

/// Body of `POST /api/v1/books`. Every field but `description` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewBook {
    pub fn into_book(self) -> Book {
        Book {
            book_id: self.book_id,
            title: self.title,
            author: self.author,
            description: self.description,
        }
    }
}

/// Body of `PUT /api/v1/books/{bookId}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// `Some(None)` is an explicit `null` and clears the stored description.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

/// Wrap any value that is present in the body, `null` included, so it differs from absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.description.is_none()
    }

    /// Apply supplied fields onto an existing record.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(description) = &self.description {
            book.description = description.clone();
        }
    }
}

/// `{bookId}` path segment. Non-numeric input parses to `None`, which matches no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookIdParam(pub Option<i32>);

impl BookIdParam {
    pub fn parse(segment: &str) -> Self {
        BookIdParam(segment.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_with_camel_case_id() {
        let book = Book {
            book_id: 3,
            title: "Fantastic Mr. Fox".into(),
            author: "Roald Dahl".into(),
            description: None,
        };
        let v = serde_json::to_value(&book).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "bookId": 3,
                "title": "Fantastic Mr. Fox",
                "author": "Roald Dahl",
                "description": null
            })
        );
    }

    #[test]
    fn new_book_requires_book_id() {
        let err = serde_json::from_value::<NewBook>(serde_json::json!({
            "title": "Fantastic Mr. Fox",
            "author": "Roald Dahl"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("bookId"));
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let mut book = Book {
            book_id: 1,
            title: "The Hobbit".into(),
            author: "J. R. R. Tolkien".into(),
            description: Some("jewellery".into()),
        };
        let update = BookUpdate {
            title: Some("New Title".into()),
            ..Default::default()
        };
        update.apply_to(&mut book);
        assert_eq!(book.title, "New Title");
        assert_eq!(book.author, "J. R. R. Tolkien");
        assert_eq!(book.description.as_deref(), Some("jewellery"));
    }

    #[test]
    fn explicit_null_description_differs_from_absent() {
        let cleared: BookUpdate = serde_json::from_value(serde_json::json!({ "description": null })).unwrap();
        assert_eq!(cleared.description, Some(None));
        assert!(!cleared.is_empty());

        let untouched: BookUpdate = serde_json::from_value(serde_json::json!({ "title": "New Title" })).unwrap();
        assert_eq!(untouched.description, None);
    }

    #[test]
    fn null_description_clears_stored_value() {
        let mut book = Book {
            book_id: 1,
            title: "The Hobbit".into(),
            author: "J. R. R. Tolkien".into(),
            description: Some("jewellery".into()),
        };
        BookUpdate {
            description: Some(None),
            ..Default::default()
        }
        .apply_to(&mut book);
        assert_eq!(book.description, None);
    }

    #[test]
    fn non_numeric_id_parses_to_none() {
        assert_eq!(BookIdParam::parse("77"), BookIdParam(Some(77)));
        assert_eq!(BookIdParam::parse("abc"), BookIdParam(None));
        assert_eq!(BookIdParam::parse(""), BookIdParam(None));
        // No leading-digit parsing: the whole segment must be an integer.
        assert_eq!(BookIdParam::parse("1abc"), BookIdParam(None));
    }
}
