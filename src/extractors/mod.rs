//! Request extractors that validate before the handler runs.

pub mod product;

pub use product::{NewProduct, ProductId, ProductUpdate};
