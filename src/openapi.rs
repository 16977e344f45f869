//! OpenAPI document served behind the Swagger UI at `/docs`.

use crate::entity::{CreateProduct, Product, UpdateProduct};
use crate::error::ErrorBody;
use crate::handlers::product;
use crate::validation::{FieldError, Location, ValidationErrors};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// `{ "data": Product }`
#[derive(Serialize, ToSchema)]
pub struct ProductBody {
    pub data: Product,
}

/// `{ "data": [Product] }`
#[derive(Serialize, ToSchema)]
pub struct ProductListBody {
    pub data: Vec<Product>,
}

/// `{ "data": "Producto eliminado" }`
#[derive(Serialize, ToSchema)]
pub struct DeletedBody {
    #[schema(example = "Producto eliminado")]
    pub data: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products REST API",
        description = "API docs for products"
    ),
    paths(
        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::toggle_availability,
        product::delete_product,
    ),
    components(schemas(
        Product,
        CreateProduct,
        UpdateProduct,
        ProductBody,
        ProductListBody,
        DeletedBody,
        ErrorBody,
        ValidationErrors,
        FieldError,
        Location,
    )),
    tags((name = product::TAG, description = "Product catalog endpoints"))
)]
pub struct ApiDoc;
