//! Settings from the process environment, after loading `.env.{environment}`.

use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_ENVIRONMENT: &str = "dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    /// Only set for the postgres backend.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub body_limit: usize,
    pub seed: bool,
}

/// Environment name from `APP_ENV`, default `dev`.
pub fn environment() -> String {
    std::env::var("APP_ENV")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.into())
}

/// Load `.env.{environment}` if it exists. Variables already set in the process win.
/// Runs before logging is initialised, so the caller reports the outcome.
pub fn load_env_file(environment: &str) -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::from_filename(format!(".env.{}", environment)) {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

impl Settings {
    pub fn from_env(environment: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(environment, |key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(environment: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let default_backend = if environment == "test" {
            StoreBackend::Memory
        } else {
            StoreBackend::Postgres
        };
        let backend = match get("STORE_BACKEND") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "STORE_BACKEND",
                value: v,
            })?,
            None => default_backend,
        };

        let database_url = match backend {
            StoreBackend::Memory => None,
            StoreBackend::Postgres => Some(match get("DATABASE_URL") {
                Some(url) => url,
                None => database_url_from_parts(&get)?,
            }),
        };

        Ok(Settings {
            environment: environment.to_string(),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or("PORT", get("PORT"), 3000)?,
            backend,
            database_url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5)?,
            body_limit: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT)?,
            seed: parse_or("SEED", get("SEED"), environment == DEFAULT_ENVIRONMENT)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `postgres://{DB_USERNAME}:{DB_PASSWORD}@{DB_HOST}:{DB_PORT}/{DB_NAME}`
fn database_url_from_parts<G>(get: &G) -> Result<String, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let user = get("DB_USERNAME").ok_or(ConfigError::Missing("DB_USERNAME"))?;
    let password = get("DB_PASSWORD").unwrap_or_default();
    let host = get("DB_HOST").unwrap_or_else(|| "localhost".into());
    let port: u16 = parse_or("DB_PORT", get("DB_PORT"), 5432)?;
    let name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
    Ok(format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name))
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_defaults_to_memory_store() {
        let s = Settings::from_lookup("test", lookup(&[])).unwrap();
        assert_eq!(s.backend, StoreBackend::Memory);
        assert!(s.database_url.is_none());
        assert!(!s.seed);
        assert_eq!(s.port, 3000);
    }

    #[test]
    fn dev_builds_url_from_parts_and_seeds() {
        let s = Settings::from_lookup(
            "dev",
            lookup(&[
                ("DB_USERNAME", "books"),
                ("DB_PASSWORD", "secret"),
                ("DB_HOST", "db"),
                ("DB_NAME", "library"),
                ("PORT", "8080"),
            ]),
        )
        .unwrap();
        assert_eq!(s.backend, StoreBackend::Postgres);
        assert_eq!(s.database_url.as_deref(), Some("postgres://books:secret@db:5432/library"));
        assert!(s.seed);
        assert_eq!(s.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn database_url_wins_over_parts() {
        let s = Settings::from_lookup(
            "production",
            lookup(&[("DATABASE_URL", "postgres://localhost/books"), ("DB_NAME", "ignored")]),
        )
        .unwrap();
        assert_eq!(s.database_url.as_deref(), Some("postgres://localhost/books"));
        assert!(!s.seed);
    }

    #[test]
    fn missing_db_name_is_reported() {
        let err = Settings::from_lookup("dev", lookup(&[("DB_USERNAME", "books")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_NAME")));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = Settings::from_lookup("test", lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn unknown_backend_is_reported() {
        let err = Settings::from_lookup("test", lookup(&[("STORE_BACKEND", "sqlite")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STORE_BACKEND", .. }));
    }
}
