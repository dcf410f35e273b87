use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3003;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid HOST/PORT: {0}")]
    InvalidAddr(String),
    #[error("database not configured: set DATABASE_URL or DB_HOST/DB_USER/DB_PASS/DB_NAME (missing {0})")]
    MissingDatabase(&'static str),
}

pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = get("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let raw = format!("{}:{}", host, port);
        let addr = raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))?;
        Ok(Self { addr })
    }
}

#[derive(Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl DatabaseConfig {
    /// DATABASE_URL 优先，否则由 DB_HOST / DB_PORT / DB_USER / DB_PASS / DB_NAME 拼接
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let pool_size = get("DB_POOL_SIZE")
            .and_then(|s| s.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_POOL_SIZE);

        if let Some(url) = get("DATABASE_URL") {
            return Ok(Self { url, pool_size });
        }

        let host = get("DB_HOST").ok_or(ConfigError::MissingDatabase("DB_HOST"))?;
        let user = get("DB_USER").ok_or(ConfigError::MissingDatabase("DB_USER"))?;
        let pass = get("DB_PASS").ok_or(ConfigError::MissingDatabase("DB_PASS"))?;
        let name = get("DB_NAME").ok_or(ConfigError::MissingDatabase("DB_NAME"))?;
        let port: u16 = get("DB_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DB_PORT);

        Ok(Self {
            url: format!("postgres://{user}:{pass}@{host}:{port}/{name}"),
            pool_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn server_defaults_to_3003() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr.to_string(), "127.0.0.1:3003");
    }

    #[test]
    fn database_url_wins_over_parts() {
        let cfg = DatabaseConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://a:b@db/stocks"),
            ("DB_HOST", "ignored"),
        ]))
        .unwrap();
        assert_eq!(cfg.url, "postgres://a:b@db/stocks");
        assert_eq!(cfg.pool_size, 10);
    }

    #[test]
    fn url_is_composed_from_parts() {
        let cfg = DatabaseConfig::from_lookup(lookup(&[
            ("DB_HOST", "10.0.0.5"),
            ("DB_USER", "stock"),
            ("DB_PASS", "pw"),
            ("DB_NAME", "market"),
            ("DB_POOL_SIZE", "4"),
        ]))
        .unwrap();
        assert_eq!(cfg.url, "postgres://stock:pw@10.0.0.5:5432/market");
        assert_eq!(cfg.pool_size, 4);
    }

    #[test]
    fn missing_database_is_an_error() {
        let err = DatabaseConfig::from_lookup(lookup(&[("DB_HOST", "h")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingDatabase("DB_USER"));
    }
}
