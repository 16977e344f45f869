//! HTTP handlers.

pub mod product;
pub use product::*;
