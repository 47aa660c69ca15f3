// catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Product not found: {id}")]
  NotFound { id: u64 },

  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Step already exists: {step_name}")]
  DuplicateStep { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Step '{step_name}' failed. Source: {source}")]
  StepFailure {
    step_name: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Error in user-provided handler. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal catalog error: {0}")]
  Internal(String),
}

impl CatalogError {
  /// True when the error means "no product with that id", as opposed to a fault.
  pub fn is_not_found(&self) -> bool {
    matches!(self, CatalogError::NotFound { .. })
  }
}

impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a CatalogError that was carried through anyhow instead of nesting it.
    match err.downcast::<CatalogError>() {
      Ok(catalog_err) => catalog_err,
      Err(other) => CatalogError::HandlerError { source: other },
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
