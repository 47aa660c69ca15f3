// catalog/src/store/shared.rs
use crate::model::Product;
use crate::store::catalog_store::CatalogStore;
use crate::store::seed;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Process-wide handle to the catalog, cheap to clone.
///
/// All mutations (including id allocation) happen under the single write lock,
/// so concurrent writers never share an id and no reader observes a
/// half-applied change. Guards are blocking and MUST NOT be held across
/// `.await` suspension points.
#[derive(Debug, Clone, Default)]
pub struct Catalog(Arc<RwLock<CatalogStore>>);

impl Catalog {
  pub fn new(store: CatalogStore) -> Self {
    Catalog(Arc::new(RwLock::new(store)))
  }

  /// A catalog preloaded with the demo products.
  pub fn seeded() -> Self {
    Self::new(CatalogStore::with_products(seed::demo_products()))
  }

  /// Acquires a read lock.
  pub fn read(&self) -> RwLockReadGuard<'_, CatalogStore> {
    self.0.read()
  }

  /// Acquires a write lock.
  pub fn write(&self) -> RwLockWriteGuard<'_, CatalogStore> {
    self.0.write()
  }

  /// Copy of the current collection in canonical order.
  pub fn snapshot(&self) -> Vec<Product> {
    self.read().list().to_vec()
  }

  /// Replaces the whole collection and re-seats the id counter past `products`.
  pub fn reset(&self, products: Vec<Product>) {
    *self.write() = CatalogStore::with_products(products);
  }
}
