//! PostgreSQL book store over a sqlx pool.

use super::{BookRepository, StoreError};
use crate::model::{Book, BookUpdate, NewBook};
use crate::sql::{self, bind_all};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{ConnectOptions, PgPool, Row};
use std::str::FromStr;

#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn row_to_book(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        book_id: row.try_get("bookId")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        description: row.try_get("description")?,
    })
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let q = sql::select_all();
        tracing::debug!(sql = %q.sql, "query");
        let rows = bind_all(sqlx::query(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(row_to_book).collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError> {
        let q = sql::select_by_id(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(row_to_book).transpose()?)
    }

    async fn insert(&self, book: NewBook) -> Result<Book, StoreError> {
        let q = sql::insert(&book);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query(&q.sql), &q.params)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::Duplicate(book.book_id)
                } else {
                    StoreError::Db(e)
                }
            })?;
        Ok(row_to_book(&row)?)
    }

    async fn update(&self, id: i32, changes: BookUpdate) -> Result<(), StoreError> {
        let Some(q) = sql::update(id, &changes) else {
            return Ok(());
        };
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(sqlx::query(&q.sql), &q.params)
            .execute(&self.pool)
            .await?;
        tracing::debug!(book_id = id, rows = result.rows_affected(), "update applied");
        Ok(())
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(sqlx::query(&q.sql), &q.params)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the books table if it does not exist. No column migrations are attempted.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(&sql::create_table()).execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), StoreError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| StoreError::Unavailable("database url has no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
