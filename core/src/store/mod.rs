pub mod catalog_store;
pub mod seed;
pub mod shared;

pub use catalog_store::CatalogStore;
pub use seed::demo_products;
pub use shared::Catalog;
