//! `Product` entity: row type, table mapping and the validated inputs that write it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Table backing [`Product`].
pub const TABLE: &str = "products";

/// Column list shared by every statement that returns a full row.
pub const COLUMNS: &str = "id, name, price, availability, created_at, updated_at";

/// DDL applied by `Database::sync`. Idempotent.
pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL CHECK (btrim(name) <> ''),
    price DOUBLE PRECISION NOT NULL CHECK (price > 0),
    availability BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = 1000.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/products` once validated.
#[derive(Clone, Debug, PartialEq, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Monitor Curvo")]
    pub name: String,
    #[schema(example = 500.0)]
    pub price: f64,
}

/// Body of `PUT /api/products/{id}` once validated. `availability` is kept
/// when omitted.
#[derive(Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "Monitor Curvo")]
    pub name: String,
    #[schema(example = 500.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: Option<bool>,
}

impl Product {
    pub(crate) fn apply_update(&mut self, input: UpdateProduct, now: DateTime<Utc>) {
        self.name = input.name;
        self.price = input.price;
        if let Some(availability) = input.availability {
            self.availability = availability;
        }
        self.updated_at = now;
    }

    pub(crate) fn toggle_availability(&mut self, now: DateTime<Utc>) {
        self.availability = !self.availability;
        self.updated_at = now;
    }
}
