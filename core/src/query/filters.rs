// catalog/src/query/filters.rs

//! Independent inclusion tests derived from list parameters.

use crate::model::Product;
use crate::query::params::ParsedQuery;

/// The filter families, in the fixed order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
  Search,
  Category,
  InStock,
  MinPrice,
  MaxPrice,
}

impl FilterKind {
  pub const ALL: [FilterKind; 5] = [
    FilterKind::Search,
    FilterKind::Category,
    FilterKind::InStock,
    FilterKind::MinPrice,
    FilterKind::MaxPrice,
  ];

  /// Pipeline step name for this filter.
  pub fn step_name(self) -> &'static str {
    match self {
      FilterKind::Search => "search",
      FilterKind::Category => "category",
      FilterKind::InStock => "in_stock",
      FilterKind::MinPrice => "min_price",
      FilterKind::MaxPrice => "max_price",
    }
  }
}

/// One predicate. Text operands are stored lowercased.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
  /// Substring of `name` or `description`, case-insensitive.
  Search(String),
  /// Whole `category`, case-insensitive.
  Category(String),
  InStock(bool),
  MinPrice(f64),
  MaxPrice(f64),
}

impl ProductFilter {
  pub fn kind(&self) -> FilterKind {
    match self {
      ProductFilter::Search(_) => FilterKind::Search,
      ProductFilter::Category(_) => FilterKind::Category,
      ProductFilter::InStock(_) => FilterKind::InStock,
      ProductFilter::MinPrice(_) => FilterKind::MinPrice,
      ProductFilter::MaxPrice(_) => FilterKind::MaxPrice,
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    match self {
      ProductFilter::Search(term) => {
        product.name.to_lowercase().contains(term.as_str())
          || (!product.description.is_empty() && product.description.to_lowercase().contains(term.as_str()))
      }
      ProductFilter::Category(category) => product.category.to_lowercase() == *category,
      ProductFilter::InStock(in_stock) => product.in_stock == *in_stock,
      ProductFilter::MinPrice(min) => product.price >= *min,
      ProductFilter::MaxPrice(max) => product.price <= *max,
    }
  }

  /// Filters for every present parameter, in `FilterKind::ALL` order.
  pub fn from_query(query: &ParsedQuery) -> Vec<ProductFilter> {
    [
      query.search.clone().map(ProductFilter::Search),
      query.category.clone().map(ProductFilter::Category),
      query.in_stock.map(ProductFilter::InStock),
      query.min_price.map(ProductFilter::MinPrice),
      query.max_price.map(ProductFilter::MaxPrice),
    ]
    .into_iter()
    .flatten()
    .collect()
  }
}

/// Keeps the products every filter accepts, preserving order.
pub fn apply_filters(mut products: Vec<Product>, filters: &[ProductFilter]) -> Vec<Product> {
  for filter in filters {
    products.retain(|p| filter.matches(p));
  }
  products
}
