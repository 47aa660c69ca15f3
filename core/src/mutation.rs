// catalog/src/mutation.rs

//! Create, update and delete against the shared catalog.
//!
//! Each operation is a single read-modify-write under the catalog's write lock,
//! so a failure leaves the store exactly as it was.

use crate::error::CatalogResult;
use crate::model::{Product, ProductInput};
use crate::store::Catalog;
use tracing::{info, instrument, warn};

/// Fetches one product by id.
#[instrument(name = "catalog::get_product", skip(catalog), err(Display))]
pub fn get_product(catalog: &Catalog, id: u64) -> CatalogResult<Product> {
  catalog.read().get(id).cloned()
}

/// Stores a new product. `input` must already be validated.
#[instrument(name = "catalog::create_product", skip(catalog, input), fields(name = %input.name))]
pub fn create_product(catalog: &Catalog, input: ProductInput) -> Product {
  let product = catalog.write().insert(input);
  info!(product_id = product.id, "Product created.");
  product
}

/// Merges `input` into an existing product.
#[instrument(name = "catalog::update_product", skip(catalog, input), err(Display))]
pub fn update_product(catalog: &Catalog, id: u64, input: ProductInput) -> CatalogResult<Product> {
  let updated = catalog.write().replace(id, input).inspect_err(|_| {
    warn!(product_id = id, "Update of unknown product.");
  })?;
  info!(product_id = id, "Product updated.");
  Ok(updated)
}

/// Removes a product and returns it. Its id is never handed out again.
#[instrument(name = "catalog::delete_product", skip(catalog), err(Display))]
pub fn delete_product(catalog: &Catalog, id: u64) -> CatalogResult<Product> {
  let removed = catalog.write().remove(id).inspect_err(|_| {
    warn!(product_id = id, "Delete of unknown product.");
  })?;
  info!(product_id = id, "Product deleted.");
  Ok(removed)
}
