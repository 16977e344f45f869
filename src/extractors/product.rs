//! Validating extractors for the product routes.
//!
//! Each extractor runs one route's validator chain and rejects the request
//! with every collected error before the handler runs:
//!
//! | Extractor         | Chain                                  |
//! |-------------------|----------------------------------------|
//! | `ProductId`       | `id`                                   |
//! | `NewProduct`      | `name`, `price`                        |
//! | `ProductUpdate`   | `id`, `name`, `price`, `availability`  |

use crate::entity::{CreateProduct, UpdateProduct};
use crate::error::AppError;
use crate::validation::Checks;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap, StatusCode},
};
use serde_json::{Map, Value};

/// Validated `:id` path parameter.
#[derive(Clone, Copy, Debug)]
pub struct ProductId(pub i32);

/// Validated body of a create request.
#[derive(Clone, Debug)]
pub struct NewProduct(pub CreateProduct);

/// Validated path id and body of a full update.
#[derive(Clone, Debug)]
pub struct ProductUpdate {
    pub id: i32,
    pub input: UpdateProduct,
}

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut checks = Checks::new();
        let id = check_path_id(parts, state, &mut checks).await?;
        checks.finish(id).map(ProductId)
    }
}

#[async_trait]
impl<S> FromRequest<S> for NewProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = json_body(req, state).await?;
        let mut checks = Checks::new();
        let name = checks.body_name(&body);
        let price = checks.body_price(&body);
        let (name, price) = checks.finish(name.zip(price))?;
        Ok(NewProduct(CreateProduct { name, price }))
    }
}

#[async_trait]
impl<S> FromRequest<S> for ProductUpdate
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let mut checks = Checks::new();
        let id = check_path_id(&mut parts, state, &mut checks).await?;
        let body = match json_body(Request::from_parts(parts, body), state).await {
            Ok(body) => body,
            Err(e) => {
                // an invalid id is reported ahead of an unreadable body
                checks.finish(Some(()))?;
                return Err(e);
            }
        };
        let name = checks.body_name(&body);
        let price = checks.body_price(&body);
        let availability = checks.body_availability(&body);

        let (((id, name), price), availability) =
            checks.finish(id.zip(name).zip(price).zip(availability))?;
        Ok(ProductUpdate {
            id,
            input: UpdateProduct {
                name,
                price,
                availability,
            },
        })
    }
}

async fn check_path_id<S>(parts: &mut Parts, state: &S, checks: &mut Checks) -> Result<Option<i32>, AppError>
where
    S: Send + Sync,
{
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(checks.param_id(&raw))
}

/// Parse the body as JSON. Requests without a JSON content type, or with an
/// empty body, read as `{}` so the field validators report what is missing.
async fn json_body<S>(req: Request, state: &S) -> Result<Value, AppError>
where
    S: Send + Sync,
{
    let is_json = has_json_content_type(req.headers());
    let bytes = Bytes::from_request(req, state).await.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(e.body_text())
        }
    })?;
    if !is_json || bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(&bytes).map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
