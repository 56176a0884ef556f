//! Builds parameterized CREATE TABLE, SELECT, INSERT, UPDATE, DELETE for books.

use crate::model::{BookUpdate, NewBook};
use crate::sql::params::BindValue;

pub const BOOKS_TABLE: &str = "books";
const PK: &str = "bookId";

/// Quote identifier for PostgreSQL. `bookId` is mixed case and must stay quoted.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn select_column_list() -> String {
    [PK, "title", "author", "description"]
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Idempotent DDL for the books table.
pub fn create_table() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            {} INTEGER PRIMARY KEY,
            "title" VARCHAR(255) NOT NULL,
            "author" VARCHAR(255) NOT NULL,
            "description" TEXT,
            "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updatedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        quoted(BOOKS_TABLE),
        quoted(PK)
    )
}

/// SELECT every book, ordered by id.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        quoted(BOOKS_TABLE),
        quoted(PK)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(),
        quoted(BOOKS_TABLE),
        quoted(PK),
        n
    );
    q
}

/// INSERT one book, returning the stored row.
pub fn insert(book: &NewBook) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders = [
        q.push_param(BindValue::Int(book.book_id)),
        q.push_param(BindValue::Text(book.title.clone())),
        q.push_param(BindValue::Text(book.author.clone())),
        q.push_param(BindValue::NullableText(book.description.clone())),
    ]
    .iter()
    .map(|n| format!("${}", n))
    .collect::<Vec<_>>();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(BOOKS_TABLE),
        select_column_list(),
        placeholders.join(", "),
        select_column_list()
    );
    q
}

/// UPDATE by id: SET only the supplied fields. `None` when nothing was supplied.
pub fn update(id: i32, changes: &BookUpdate) -> Option<QueryBuf> {
    if changes.is_empty() {
        return None;
    }
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(title) = &changes.title {
        let n = q.push_param(BindValue::Text(title.clone()));
        sets.push(format!("{} = ${}", quoted("title"), n));
    }
    if let Some(author) = &changes.author {
        let n = q.push_param(BindValue::Text(author.clone()));
        sets.push(format!("{} = ${}", quoted("author"), n));
    }
    if let Some(description) = &changes.description {
        let n = q.push_param(BindValue::NullableText(description.clone()));
        sets.push(format!("{} = ${}", quoted("description"), n));
    }
    sets.push(format!("{} = NOW()", quoted("updatedAt")));
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(BOOKS_TABLE),
        sets.join(", "),
        quoted(PK),
        id_param
    );
    Some(q)
}

/// DELETE by id.
pub fn delete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(BOOKS_TABLE),
        quoted(PK),
        n
    );
    q
}
