//! Product CRUD handlers: list, read, create, update, toggle availability, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{NewProduct, ProductId, ProductUpdate};
use crate::openapi::{DeletedBody, ProductBody, ProductListBody};
use crate::response::{success_created, success_ok, DELETED_MESSAGE};
use crate::state::AppState;
use crate::validation::ValidationErrors;
use axum::{extract::State, response::IntoResponse};

pub const TAG: &str = "Products";

/// Get a list of products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = TAG,
    responses(
        (status = 200, description = "Successful response, newest first", body = ProductListBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.store.list().await?;
    Ok(success_ok(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "The ID of the product to retrieve")),
    responses(
        (status = 200, description = "Successful response", body = ProductBody),
        (status = 400, description = "Bad request - Invalid ID supplied", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let product = state.store.find(id).await?.ok_or(AppError::NotFound(id))?;
    Ok(success_ok(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = TAG,
    request_body = crate::entity::CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductBody),
        (status = 400, description = "Bad request - Invalid data supplied", body = ValidationErrors)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    NewProduct(input): NewProduct,
) -> Result<impl IntoResponse, AppError> {
    let product = state.store.create(input).await?;
    Ok(success_created(product))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "The ID of the product to update")),
    request_body = crate::entity::UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductBody),
        (status = 400, description = "Bad request - Invalid data supplied", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductUpdate { id, input }: ProductUpdate,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .store
        .update(id, input)
        .await?
        .ok_or(AppError::NotFound(id))?;
    tracing::info!(product_id = id, "updated product");
    Ok(success_ok(product))
}

/// Update availability of a product
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "The ID of the product to update")),
    responses(
        (status = 200, description = "Product availability updated", body = ProductBody),
        (status = 400, description = "Bad request - Invalid ID supplied", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn toggle_availability(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .store
        .toggle_availability(id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(success_ok(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "The ID of the product to delete")),
    responses(
        (status = 200, description = "Product deleted", body = DeletedBody),
        (status = 400, description = "Bad request - Invalid ID supplied", body = ValidationErrors),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(id));
    }
    Ok(success_ok(DELETED_MESSAGE))
}
