//! Product persistence behind a trait so handlers can run against PostgreSQL or memory.

mod memory;
mod postgres;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

use crate::entity::{CreateProduct, Product, UpdateProduct};
use crate::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, highest id first.
    async fn list(&self) -> AppResult<Vec<Product>>;

    async fn find(&self, id: i32) -> AppResult<Option<Product>>;

    /// Insert; the store assigns id, default availability and timestamps.
    async fn create(&self, input: CreateProduct) -> AppResult<Product>;

    /// Replace name and price (and availability when given). `None` if the id is unknown.
    async fn update(&self, id: i32, input: UpdateProduct) -> AppResult<Option<Product>>;

    /// Flip availability. `None` if the id is unknown.
    async fn toggle_availability(&self, id: i32) -> AppResult<Option<Product>>;

    /// Hard delete. `false` if the id is unknown.
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> AppResult<()>;
}
