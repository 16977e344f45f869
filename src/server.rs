//! Application assembly: origin policy, request logging, product API, docs and probes.

use crate::cors::{enforce_origin, OriginPolicy};
use crate::db::{ConnectionState, Database};
use crate::error::ConfigError;
use crate::openapi::ApiDoc;
use crate::routes::{common_routes, product_routes};
use crate::state::AppState;
use axum::{middleware, Router};
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
/// Largest accepted request body, in bytes.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Build the full application. Only the product API sits behind the origin
/// policy; docs and probes stay reachable from a plain browser tab.
pub fn build_app(state: AppState, frontend_url: &str) -> Result<Router, ConfigError> {
    let policy = OriginPolicy::new(frontend_url)?;

    // CORS wraps the method fallback too, so preflights are answered;
    // the guard only wraps real endpoints.
    let api = product_routes(state.clone())
        .layer(policy.cors_layer())
        .route_layer(middleware::from_fn_with_state(policy, enforce_origin));

    let app = Router::new()
        .merge(api)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .merge(common_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT)),
        );

    Ok(app)
}

/// Connect to the database in the background; the listener does not wait for it.
pub fn spawn_connect(db: Database) -> JoinHandle<ConnectionState> {
    tokio::spawn(async move { db.connect().await })
}
