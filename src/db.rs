//! Persistence client: one lazily connected PostgreSQL pool for the whole process.

use crate::entity;
use crate::error::{AppResult, ConfigError};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Logged when the startup connection fails.
pub const CONNECT_ERROR_MESSAGE: &str = "Error al conectar a la base de datos";

/// Outcome of [`Database::connect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    /// The API keeps serving; store-backed requests fail until the database is reachable.
    Degraded,
}

#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Builds the pool without opening a connection. Fails only on a malformed URL.
    pub fn new(database_url: &str, max_connections: u32) -> Result<Self, ConfigError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)
            .map_err(|e| ConfigError::Invalid {
                name: "DATABASE_URL",
                reason: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verify the database is reachable and the credentials are accepted.
    pub async fn authenticate(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create the product table if it does not exist yet.
    pub async fn sync(&self) -> AppResult<()> {
        tracing::debug!(sql = %entity::CREATE_TABLE.trim(), "query");
        sqlx::query(entity::CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Authenticate then sync. Failures are logged and reported as
    /// [`ConnectionState::Degraded`]; they never propagate.
    pub async fn connect(&self) -> ConnectionState {
        if let Err(e) = self.authenticate().await {
            tracing::error!(error = %e, "{}", CONNECT_ERROR_MESSAGE);
            return ConnectionState::Degraded;
        }
        if let Err(e) = self.sync().await {
            tracing::error!(error = %e, "failed to sync database schema");
            return ConnectionState::Degraded;
        }
        tracing::info!("database connected");
        ConnectionState::Connected
    }
}
