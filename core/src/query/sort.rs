// catalog/src/query/sort.rs

//! Ordering of products by a named field.

use crate::model::Product;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending,
}

impl SortDirection {
  /// `"desc"` sorts descending; anything else (or nothing) ascending.
  pub fn from_param(order: Option<&str>) -> Self {
    match order {
      Some("desc") => SortDirection::Descending,
      _ => SortDirection::Ascending,
    }
  }
}

/// Recognized sortable fields, each with a typed accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  Id,
  Name,
  Price,
  Category,
  Description,
  InStock,
  CreatedAt,
  UpdatedAt,
}

/// A field value as seen by the comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
  Number(f64),
  Text(&'a str),
  Flag(bool),
  Time(DateTime<Utc>),
}

impl SortKey {
  pub fn from_name(name: &str) -> Option<Self> {
    let key = match name {
      "id" => SortKey::Id,
      "name" => SortKey::Name,
      "price" => SortKey::Price,
      "category" => SortKey::Category,
      "description" => SortKey::Description,
      "inStock" => SortKey::InStock,
      "createdAt" => SortKey::CreatedAt,
      "updatedAt" => SortKey::UpdatedAt,
      _ => return None,
    };
    Some(key)
  }

  pub fn value(self, product: &Product) -> Option<FieldValue<'_>> {
    match self {
      // Ids stay far below 2^53, so the f64 view is exact.
      SortKey::Id => Some(FieldValue::Number(product.id as f64)),
      SortKey::Name => Some(FieldValue::Text(&product.name)),
      SortKey::Price => Some(FieldValue::Number(product.price)),
      SortKey::Category => Some(FieldValue::Text(&product.category)),
      SortKey::Description => Some(FieldValue::Text(&product.description)),
      SortKey::InStock => Some(FieldValue::Flag(product.in_stock)),
      SortKey::CreatedAt => Some(FieldValue::Time(product.created_at)),
      SortKey::UpdatedAt => product.updated_at.map(FieldValue::Time),
    }
  }
}

/// Same-kind values compare naturally; anything else is a tie.
pub fn compare_values(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
  match (a, b) {
    (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
    (Some(FieldValue::Flag(x)), Some(FieldValue::Flag(y))) => x.cmp(&y),
    (Some(FieldValue::Time(x)), Some(FieldValue::Time(y))) => x.cmp(&y),
    _ => Ordering::Equal,
  }
}

/// Requested field plus direction. An unrecognized field keeps the input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
  pub field: String,
  pub key: Option<SortKey>,
  pub direction: SortDirection,
}

impl SortSpec {
  pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
    let field = field.into();
    let key = SortKey::from_name(&field);
    Self { field, key, direction }
  }

  pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
    let Some(key) = self.key else {
      return Ordering::Equal;
    };
    let ordering = compare_values(key.value(a), key.value(b));
    match self.direction {
      SortDirection::Ascending => ordering,
      SortDirection::Descending => ordering.reverse(),
    }
  }
}

/// Stable sort: ties keep their relative input order in both directions.
pub fn sort_products(products: Vec<Product>, spec: &SortSpec) -> Vec<Product> {
  if spec.key.is_none() {
    return products;
  }
  merge_sort_by(products, &|a: &Product, b: &Product| spec.compare(a, b))
}

// Ties with a missing field make the comparator non-transitive; the std sorts
// may panic on such comparators, this merge sort never does and stays stable.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
  F: Fn(&T, &T) -> Ordering,
{
  if items.len() < 2 {
    return items;
  }
  let right = items.split_off(items.len() / 2);
  let left = merge_sort_by(items, compare);
  let right = merge_sort_by(right, compare);

  let mut merged = Vec::with_capacity(left.len() + right.len());
  let mut left = left.into_iter().peekable();
  let mut right = right.into_iter().peekable();
  loop {
    let take_left = match (left.peek(), right.peek()) {
      (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
      (Some(_), None) => true,
      (None, Some(_)) => false,
      (None, None) => break,
    };
    merged.extend(if take_left { left.next() } else { right.next() });
  }
  merged
}
