//! # Product Catalog
//!
//! The domain module: the Product entity, the in-memory store that owns the
//! collection, list-query parsing, and the catalog error taxonomy.

pub mod errors;
pub mod product;
pub mod query;
pub mod store;

pub use errors::{CatalogError, CatalogResult};
pub use product::{CreateProduct, Product, UpdateProduct};
pub use query::ListQuery;
pub use store::ProductStore;
