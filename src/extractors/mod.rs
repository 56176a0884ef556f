//! Request extractors that reject into `AppError` instead of axum's default rejections.

mod book_id;
mod json;
pub use json::{JsonOrDefault, ValidJson};
