//! HTTP handlers for the book resource.

pub mod books;
pub use books::*;
