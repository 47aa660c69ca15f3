// catalog/src/query/params.rs

//! Raw textual list parameters and their coercion into typed values.
//!
//! Every parse function returns either a typed value or an explicit "absent"
//! marker. Invalid input degrades to "no constraint" or to a default value,
//! never to an error or to a NaN comparison.

use crate::query::paginate::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::query::sort::{SortDirection, SortSpec};
use serde::{Deserialize, Serialize};

/// List parameters exactly as received. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
  pub q: Option<String>,
  pub category: Option<String>,
  pub in_stock: Option<String>,
  pub min_price: Option<String>,
  pub max_price: Option<String>,
  pub sort: Option<String>,
  pub order: Option<String>,
  pub page: Option<String>,
  pub limit: Option<String>,
}

/// Echo of the recognized filter parameters, raw, for response transparency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
  pub search: Option<String>,
  pub category: Option<String>,
  pub in_stock: Option<String>,
  pub min_price: Option<String>,
  pub max_price: Option<String>,
}

/// Typed view of a `ListQuery`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
  pub search: Option<String>,
  pub category: Option<String>,
  pub in_stock: Option<bool>,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  pub sort: Option<SortSpec>,
  pub page: PageRequest,
}

fn present(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

/// `"true"` is true; every other literal is false.
pub fn parse_flag(raw: &str) -> bool {
  raw == "true"
}

/// A finite decimal, or `None` when the text is not one.
pub fn parse_bound(raw: &str) -> Option<f64> {
  raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A positive integer, or `default` when the text is absent, non-numeric, or below 1.
///
/// Decimals truncate toward zero (`"2.5"` is 2) and values past `usize::MAX` saturate.
pub fn parse_positive(raw: Option<&str>, default: usize) -> usize {
  raw
    .and_then(|v| v.trim().parse::<f64>().ok())
    .filter(|v| v.is_finite())
    .map(f64::trunc)
    .filter(|v| *v >= 1.0)
    .map(|v| v as usize)
    .unwrap_or(default)
}

impl ListQuery {
  /// Builds a query from decoded key/value pairs. A repeated key keeps its last value;
  /// unrecognized keys are ignored.
  pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut query = ListQuery::default();
    for (key, value) in pairs {
      let slot = match key.as_ref() {
        "q" => &mut query.q,
        "category" => &mut query.category,
        "inStock" => &mut query.in_stock,
        "minPrice" => &mut query.min_price,
        "maxPrice" => &mut query.max_price,
        "sort" => &mut query.sort,
        "order" => &mut query.order,
        "page" => &mut query.page,
        "limit" => &mut query.limit,
        _ => continue,
      };
      *slot = Some(value.into());
    }
    query
  }

  pub fn parse(&self) -> ParsedQuery {
    ParsedQuery {
      search: present(&self.q).map(str::to_lowercase),
      category: present(&self.category).map(str::to_lowercase),
      in_stock: present(&self.in_stock).map(parse_flag),
      min_price: present(&self.min_price).and_then(parse_bound),
      max_price: present(&self.max_price).and_then(parse_bound),
      sort: present(&self.sort).map(|field| SortSpec::new(field, SortDirection::from_param(self.order.as_deref()))),
      page: PageRequest::new(
        parse_positive(present(&self.page), DEFAULT_PAGE),
        parse_positive(present(&self.limit), DEFAULT_LIMIT),
      ),
    }
  }

  pub fn applied_filters(&self) -> AppliedFilters {
    let echo = |value: &Option<String>| present(value).map(str::to_string);
    AppliedFilters {
      search: echo(&self.q),
      category: echo(&self.category),
      in_stock: echo(&self.in_stock),
      min_price: echo(&self.min_price),
      max_price: echo(&self.max_price),
    }
  }
}
