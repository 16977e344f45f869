//! In-memory product store for tests and local runs without PostgreSQL.

use super::ProductStore;
use crate::entity::{CreateProduct, Product, UpdateProduct};
use crate::error::AppResult;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Product>,
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryProductStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().rev().cloned().collect())
    }

    async fn find(&self, id: i32) -> AppResult<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: inner.next_id,
            name: input.name,
            price: input.price,
            availability: true,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> AppResult<Option<Product>> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|p| {
            p.apply_update(input, Utc::now());
            p.clone()
        }))
    }

    async fn toggle_availability(&self, id: i32) -> AppResult<Option<Product>> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|p| {
            p.toggle_availability(Utc::now());
            p.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
