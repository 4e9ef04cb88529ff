mod catalog_error;
mod fetch;
pub mod models;
mod store;

pub use catalog_error::CatalogError;
pub use fetch::{load_catalog, parse_catalog, CatalogClient};
pub use store::CatalogStore;
