//! Router assembly per area.

pub mod common;
pub mod product;

pub use common::common_routes;
pub use product::product_routes;
