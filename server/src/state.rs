// catalog_server/src/state.rs
use crate::config::AppConfig;
use catalog::{Catalog, QueryPipeline};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
  pub query_pipeline: Arc<QueryPipeline>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Builds the shared state, seeding the catalog when the config asks for it.
  pub fn new(config: AppConfig) -> catalog::CatalogResult<Self> {
    let catalog = if config.seed_catalog {
      Catalog::seeded()
    } else {
      Catalog::default()
    };
    tracing::info!(products = catalog.read().len(), "Catalog initialized.");
    Ok(Self {
      catalog,
      query_pipeline: Arc::new(QueryPipeline::new()?),
      config: Arc::new(config),
    })
  }
}
