//! Server binary: loads settings, prepares the store, seeds in dev, serves the API.

use bookshelf::config::{self, Settings, StoreBackend};
use bookshelf::store::{ensure_books_table, ensure_database_exists};
use bookshelf::{app, populate_dummy_data, AppState, BookRepository, InMemoryBookRepository, PgBookRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let environment = config::environment();
    let env_file = config::load_env_file(&environment);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookshelf=info,tower_http=info")),
        )
        .init();

    match env_file {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "loaded env file"),
        Ok(None) => tracing::debug!("no env file for environment"),
        Err(e) => tracing::warn!(error = %e, "could not read env file"),
    }
    tracing::info!(environment = %environment, "starting");

    let settings = Settings::from_env(&environment)?;
    let books: Arc<dyn BookRepository> = match settings.backend {
        StoreBackend::Memory => Arc::new(InMemoryBookRepository::new()),
        StoreBackend::Postgres => {
            let database_url = settings
                .database_url
                .as_deref()
                .ok_or(bookshelf::ConfigError::Missing("DATABASE_URL"))?;
            ensure_database_exists(database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(database_url)
                .await?;
            ensure_books_table(&pool).await?;
            Arc::new(PgBookRepository::new(pool))
        }
    };
    tracing::info!(backend = ?settings.backend, "store ready");

    if settings.seed {
        populate_dummy_data(books.as_ref()).await?;
    }

    let router = app(AppState::new(books), settings.body_limit);
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
