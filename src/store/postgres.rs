//! PostgreSQL product store.

use super::ProductStore;
use crate::db::Database;
use crate::entity::{CreateProduct, Product, UpdateProduct, COLUMNS, TABLE};
use crate::error::AppResult;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let sql = format!("SELECT {} FROM {} ORDER BY id DESC", COLUMNS, TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> AppResult<Option<Product>> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateProduct) -> AppResult<Product> {
        let sql = format!(
            "INSERT INTO {} (name, price) VALUES ($1, $2) RETURNING {}",
            TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(input.price)
            .fetch_one(&self.pool)
            .await?;
        tracing::info!(product_id = row.id, "created product");
        Ok(row)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> AppResult<Option<Product>> {
        let sql = format!(
            "UPDATE {} SET name = $2, price = $3, availability = COALESCE($4, availability), updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.availability)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn toggle_availability(&self, id: i32) -> AppResult<Option<Product>> {
        let sql = format!(
            "UPDATE {} SET availability = NOT availability, updated_at = NOW() WHERE id = $1 RETURNING {}",
            TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(product_id = id, "deleted product");
        }
        Ok(deleted)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
