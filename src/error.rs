//! Typed errors and HTTP mapping.

use crate::validation::ValidationErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(ValidationErrors),
    #[error("Producto con ID {0} no encontrado")]
    NotFound(i32),
    #[error("{0}")]
    BadRequest(String),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("No permitido por CORS")]
    ForbiddenOrigin,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Body of every non-validation error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Producto con ID 1 no encontrado")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ForbiddenOrigin => StatusCode::FORBIDDEN,
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                let body = ErrorBody {
                    error: "Error interno del servidor".into(),
                };
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
