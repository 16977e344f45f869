//! Products API: CRUD REST service for a product catalog backed by PostgreSQL.

pub mod config;
pub mod cors;
pub mod db;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use db::{ConnectionState, Database};
pub use entity::{CreateProduct, Product, UpdateProduct};
pub use error::{AppError, AppResult, ConfigError};
pub use server::{build_app, spawn_connect};
pub use state::AppState;
pub use store::{InMemoryProductStore, PgProductStore, ProductStore};
