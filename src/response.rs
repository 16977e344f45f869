//! Standard `{ "data": ... }` response envelope.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Confirmation payload of a successful delete.
pub const DELETED_MESSAGE: &str = "Producto eliminado";

#[derive(Debug, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::OK, Json(Data { data }))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::CREATED, Json(Data { data }))
}
