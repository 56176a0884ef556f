//! Typed values bound to PostgreSQL placeholders in order.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A value that can be bound to a books query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Int(i32),
    Text(String),
    NullableText(Option<String>),
}

/// Bind every param in placeholder order ($1, $2, ...).
pub fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [BindValue],
) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_str()),
            BindValue::NullableText(s) => query.bind(s.as_deref()),
        };
    }
    query
}
