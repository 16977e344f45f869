//! Cross-origin policy: exactly one trusted front-end origin may call the API.

use crate::error::{AppError, ConfigError};
use axum::{
    extract::{Request, State},
    http::{header::ORIGIN, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

#[derive(Clone, Debug)]
pub struct OriginPolicy {
    allowed: Arc<HeaderValue>,
}

impl OriginPolicy {
    pub fn new(frontend_url: &str) -> Result<Self, ConfigError> {
        let allowed = frontend_url
            .parse::<HeaderValue>()
            .map_err(|e| ConfigError::Invalid {
                name: "FRONTEND_URL",
                reason: e.to_string(),
            })?;
        Ok(Self {
            allowed: Arc::new(allowed),
        })
    }

    /// Exact, byte-for-byte match. A missing `Origin` never matches.
    pub fn allows(&self, origin: Option<&HeaderValue>) -> bool {
        origin == Some(self.allowed.as_ref())
    }

    /// Answers preflights and sets `Access-Control-*` headers for the trusted origin.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(self.allowed.as_ref().clone())
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    }
}

/// Middleware rejecting every request whose `Origin` is not the trusted one.
pub async fn enforce_origin(State(policy): State<OriginPolicy>, req: Request, next: Next) -> Response {
    let origin = req.headers().get(ORIGIN);
    if !policy.allows(origin) {
        tracing::warn!(
            origin = origin.and_then(|o| o.to_str().ok()).unwrap_or("<none>"),
            method = %req.method(),
            uri = %req.uri(),
            "origin rejected"
        );
        return AppError::ForbiddenOrigin.into_response();
    }
    next.run(req).await
}
