//! Product routes. Validator chains live in the extractors each handler takes
//! (see `crate::extractors::product`), so a binding here is method + path + chain + handler.

use crate::handlers::product::{
    create_product, delete_product, get_product, list_products, toggle_availability, update_product,
};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Mount point of the product API.
pub const BASE_PATH: &str = "/api/products";

/// Collection and item routes under [`BASE_PATH`]. The collection also answers
/// with a trailing slash.
pub fn product_routes(state: AppState) -> Router {
    let collection = || get(list_products).post(create_product);
    Router::new()
        .route(BASE_PATH, collection())
        .route(&format!("{}/", BASE_PATH), collection())
        .route(
            &format!("{}/:id", BASE_PATH),
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(state)
}
