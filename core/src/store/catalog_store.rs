// catalog/src/store/catalog_store.rs

//! The product collection and its identity counter.

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Product, ProductInput};
use chrono::Utc;
use tracing::{debug, trace};

/// Ordered product collection plus the next-id counter.
///
/// Insertion order is the canonical iteration order. Ids are handed out
/// strictly increasing and are never reused, including after a removal.
#[derive(Debug, Clone)]
pub struct CatalogStore {
  products: Vec<Product>,
  next_id: u64,
}

impl Default for CatalogStore {
  fn default() -> Self {
    Self::new()
  }
}

impl CatalogStore {
  pub fn new() -> Self {
    Self {
      products: Vec::new(),
      next_id: 1,
    }
  }

  /// Builds a store around preloaded records; the counter starts past the highest id.
  pub fn with_products(products: Vec<Product>) -> Self {
    let next_id = products.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
    Self { products, next_id }
  }

  pub fn list(&self) -> &[Product] {
    &self.products
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  /// The id the next `insert` will assign.
  pub fn next_id(&self) -> u64 {
    self.next_id
  }

  pub fn get(&self, id: u64) -> CatalogResult<&Product> {
    self.products.iter().find(|p| p.id == id).ok_or(CatalogError::NotFound { id })
  }

  fn index_of(&self, id: u64) -> CatalogResult<usize> {
    self
      .products
      .iter()
      .position(|p| p.id == id)
      .ok_or(CatalogError::NotFound { id })
  }

  pub fn insert(&mut self, input: ProductInput) -> Product {
    let id = self.next_id;
    self.next_id += 1;
    let product = Product::create(id, input, Utc::now());
    self.products.push(product.clone());
    debug!(product_id = id, "Product inserted.");
    product
  }

  /// Merges `input` into the record with `id`, keeping its position.
  pub fn replace(&mut self, id: u64, input: ProductInput) -> CatalogResult<Product> {
    let idx = self.index_of(id)?;
    let product = &mut self.products[idx];
    product.merge(input, Utc::now());
    trace!(product_id = id, position = idx, "Product replaced in place.");
    Ok(product.clone())
  }

  pub fn remove(&mut self, id: u64) -> CatalogResult<Product> {
    let idx = self.index_of(id)?;
    let removed = self.products.remove(idx);
    debug!(product_id = id, "Product removed; id retired.");
    Ok(removed)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn input(name: &str) -> ProductInput {
    ProductInput::new(name, 10.0, "Misc")
  }

  #[test]
  fn counter_starts_past_preloaded_ids() {
    let mut seeded = CatalogStore::new();
    seeded.insert(input("a"));
    seeded.insert(input("b"));
    let store = CatalogStore::with_products(seeded.list().to_vec());
    assert_eq!(store.next_id(), 3);
    assert_eq!(CatalogStore::with_products(Vec::new()).next_id(), 1);
  }

  #[test]
  fn removal_never_rewinds_the_counter() {
    let mut store = CatalogStore::new();
    let first = store.insert(input("a"));
    let second = store.insert(input("b"));
    store.remove(second.id).unwrap();
    let third = store.insert(input("c"));
    assert!(third.id > second.id);
    assert!(second.id > first.id);
  }

  #[test]
  fn replace_keeps_position() {
    let mut store = CatalogStore::new();
    for name in ["a", "b", "c"] {
      store.insert(input(name));
    }
    store.replace(2, input("B")).unwrap();
    let names: Vec<_> = store.list().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "B", "c"]);
  }

  #[test]
  fn unknown_ids_are_not_found() {
    let mut store = CatalogStore::new();
    assert!(store.get(7).unwrap_err().is_not_found());
    assert!(store.replace(7, input("x")).unwrap_err().is_not_found());
    assert!(store.remove(7).unwrap_err().is_not_found());
  }
}
