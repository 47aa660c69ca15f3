// catalog/src/query/paginate.rs

//! Page windows over a filtered sequence.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// A 1-based page number and a page size, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  page: usize,
  limit: usize,
}

impl Default for PageRequest {
  fn default() -> Self {
    Self {
      page: DEFAULT_PAGE,
      limit: DEFAULT_LIMIT,
    }
  }
}

impl PageRequest {
  /// Zero values are replaced with the defaults.
  pub fn new(page: usize, limit: usize) -> Self {
    Self {
      page: if page == 0 { DEFAULT_PAGE } else { page },
      limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
    }
  }

  pub fn page(&self) -> usize {
    self.page
  }

  pub fn limit(&self) -> usize {
    self.limit
  }

  /// Index of the first item on this page.
  pub fn offset(&self) -> usize {
    (self.page - 1).saturating_mul(self.limit)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
  pub page: usize,
  pub limit: usize,
  /// Size of the filtered set before slicing.
  pub total: usize,
  pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
  pub items: Vec<T>,
  pub meta: PaginationMeta,
}

/// Slices `[offset, offset + limit)` out of `items`; empty when the offset is past the end.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
  let total = items.len();
  let meta = PaginationMeta {
    page: request.page(),
    limit: request.limit(),
    total,
    total_pages: total.div_ceil(request.limit()),
  };
  let items = items.into_iter().skip(request.offset()).take(request.limit()).collect();
  Page { items, meta }
}
