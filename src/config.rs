//! Process configuration read from the environment (and an optional `.env` file).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// The only browser origin allowed to call the product API.
    pub frontend_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Exit at startup when the database is unreachable instead of running degraded.
    pub db_fail_fast: bool,
}

impl AppConfig {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let frontend_url = get("FRONTEND_URL").ok_or(ConfigError::Missing("FRONTEND_URL"))?;
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
        let db_fail_fast = parse_or("DB_FAIL_FAST", get("DB_FAIL_FAST"), false)?;

        Ok(Self {
            database_url,
            frontend_url,
            host,
            port,
            db_max_connections,
            db_fail_fast,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "HOST",
                reason: e.to_string(),
            })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_optional_values_are_absent() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/products"),
            ("FRONTEND_URL", "http://localhost:5173"),
        ])
        .unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.db_max_connections, 5);
        assert!(!config.db_fail_fast);
        assert_eq!(config.listen_addr().unwrap().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn port_is_honoured() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/products"),
            ("FRONTEND_URL", "http://localhost:5173"),
            ("PORT", "8080"),
            ("DB_FAIL_FAST", "true"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.db_fail_fast);
    }

    #[test]
    fn required_values_are_enforced() {
        let err = load(&[("FRONTEND_URL", "http://localhost:5173")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));

        let err = load(&[("DATABASE_URL", "postgres://localhost/products"), ("FRONTEND_URL", " ")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("FRONTEND_URL")));
    }

    #[test]
    fn unparsable_port_is_rejected() {
        let err = load(&[
            ("DATABASE_URL", "postgres://localhost/products"),
            ("FRONTEND_URL", "http://localhost:5173"),
            ("PORT", "eighty"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
