// catalog/src/envelope.rs

//! The uniform response wrapper.

use crate::query::{AppliedFilters, PaginationMeta, QueryOutcome};
use crate::model::Product;
use serde::{Deserialize, Serialize};

pub const MSG_CREATED: &str = "Product created successfully";
pub const MSG_UPDATED: &str = "Product updated successfully";
pub const MSG_DELETED: &str = "Product deleted successfully";
pub const MSG_NOT_FOUND: &str = "Product not found";

/// `{ success, data?, message?, pagination?, filters?, errors? }`; absent members are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pagination: Option<PaginationMeta>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub filters: Option<AppliedFilters>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub errors: Option<Vec<String>>,
}

impl<T> Envelope<T> {
  pub fn data(data: T) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: None,
      pagination: None,
      filters: None,
      errors: None,
    }
  }

  pub fn with_message(mut self, message: impl Into<String>) -> Self {
    self.message = Some(message.into());
    self
  }
}

impl Envelope<()> {
  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      success: false,
      data: None,
      message: Some(message.into()),
      pagination: None,
      filters: None,
      errors: None,
    }
  }

  pub fn with_errors(mut self, errors: Vec<String>) -> Self {
    self.errors = Some(errors);
    self
  }
}

impl From<QueryOutcome> for Envelope<Vec<Product>> {
  fn from(outcome: QueryOutcome) -> Self {
    let mut envelope = Envelope::data(outcome.page.items);
    envelope.pagination = Some(outcome.page.meta);
    envelope.filters = Some(outcome.filters);
    envelope
  }
}
