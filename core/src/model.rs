// catalog/src/model.rs

//! The product record and the field set accepted by create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry. Instances are owned by the store; callers only ever see copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: u64,
  pub name: String,
  pub price: f64,
  pub category: String,
  #[serde(default)]
  pub description: String,
  pub in_stock: bool,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Pre-validated fields for a create or an update.
///
/// `name`, `price` and `category` are always present; `description` and
/// `in_stock` fall back to defaults on create and to the stored values on update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
  pub name: String,
  pub price: f64,
  pub category: String,
  pub description: Option<String>,
  pub in_stock: Option<bool>,
}

impl ProductInput {
  pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      price,
      category: category.into(),
      description: None,
      in_stock: None,
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn with_in_stock(mut self, in_stock: bool) -> Self {
    self.in_stock = Some(in_stock);
    self
  }
}

impl Product {
  /// Builds a fresh record from `input`; the id and creation time come from the store.
  pub(crate) fn create(id: u64, input: ProductInput, now: DateTime<Utc>) -> Self {
    Self {
      id,
      name: input.name,
      price: input.price,
      category: input.category,
      description: input.description.unwrap_or_default(),
      in_stock: input.in_stock.unwrap_or(true),
      created_at: now,
      updated_at: None,
    }
  }

  /// Field-by-field merge. `name`, `price`, `category` are overwritten; omitted
  /// `description`/`in_stock` keep their stored values. `id` and `created_at` never change.
  pub(crate) fn merge(&mut self, input: ProductInput, now: DateTime<Utc>) {
    self.name = input.name;
    self.price = input.price;
    self.category = input.category;
    if let Some(description) = input.description {
      self.description = description;
    }
    if let Some(in_stock) = input.in_stock {
      self.in_stock = in_stock;
    }
    self.updated_at = Some(now);
  }
}
