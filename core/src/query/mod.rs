// catalog/src/query/mod.rs

//! Read-side building blocks: parameter parsing, predicate filters, the sort
//! comparator, the paginator and the pipeline composing them.

pub mod filters;
pub mod paginate;
pub mod params;
pub mod pipeline;
pub mod sort;

pub use filters::{apply_filters, FilterKind, ProductFilter};
pub use paginate::{paginate, Page, PageRequest, PaginationMeta, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use params::{AppliedFilters, ListQuery, ParsedQuery};
pub use pipeline::{list_products, QueryContext, QueryOutcome, QueryPipeline};
pub use sort::{sort_products, SortDirection, SortKey, SortSpec};
