//! Request validation for book payloads.

use crate::error::AppError;
use crate::model::{BookUpdate, NewBook};

/// Column width of `title` and `author`.
pub const MAX_TEXT_LEN: usize = 255;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create payload. Shape (required fields, types) is already enforced by deserialization.
    pub fn validate_new(book: &NewBook) -> Result<(), AppError> {
        validate_text("title", &book.title)?;
        validate_text("author", &book.author)?;
        Ok(())
    }

    /// Validate only the fields present in an update.
    pub fn validate_update(changes: &BookUpdate) -> Result<(), AppError> {
        if let Some(title) = &changes.title {
            validate_text("title", title)?;
        }
        if let Some(author) = &changes.author {
            validate_text("author", author)?;
        }
        Ok(())
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(())
}
