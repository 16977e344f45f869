//! Products API server.

use products_api::{build_app, spawn_connect, AppConfig, AppState, ConnectionState, Database, PgProductStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("products_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let db = Database::new(&config.database_url, config.db_max_connections)?;

    if config.db_fail_fast {
        if db.connect().await == ConnectionState::Degraded {
            return Err("database unavailable at startup (DB_FAIL_FAST is set)".into());
        }
    } else {
        spawn_connect(db.clone());
    }

    let state = AppState::new(PgProductStore::new(&db));
    let app = build_app(state, &config.frontend_url)?;

    let listener = TcpListener::bind(config.listen_addr()?).await?;
    tracing::info!("RESTAPI en el puerto {}", listener.local_addr()?.port());
    axum::serve(listener, app).await?;
    Ok(())
}
