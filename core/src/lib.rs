// catalog/src/lib.rs

//! Catalog: an in-memory product collection with a composable query pipeline.
//!
//! The crate provides:
//!  - A `CatalogStore` owning the products and a never-reused id counter,
//!    shared process-wide through the lock-guarded `Catalog` handle.
//!  - Predicate filters (search, category, stock, price range) built from
//!    textual list parameters, with explicit, non-failing coercion.
//!  - A stable sort comparator over a fixed set of typed fields.
//!  - A paginator producing page windows and `PaginationMeta`.
//!  - A `QueryPipeline` composing the above as named steps of a small,
//!    synchronous `Pipeline` engine with before/on/after hooks.
//!  - Create/update/delete operations preserving identity and timestamps.
//!  - The `Envelope` response wrapper.
//!
//! HTTP transport, authentication and payload validation live outside this crate.

pub mod core;
pub mod envelope;
pub mod error;
pub mod model;
pub mod mutation;
pub mod pipeline;
pub mod query;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::core::context::Handler;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::envelope::Envelope;
pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{Product, ProductInput};
pub use crate::mutation::{create_product, delete_product, get_product, update_product};
pub use crate::query::{list_products, ListQuery, PaginationMeta, QueryOutcome, QueryPipeline};
pub use crate::store::{Catalog, CatalogStore};

/*
    Read path:
    1. The transport deserializes the query string into a `ListQuery`.
    2. `list_products(&catalog, &pipeline, &query)` copies the current collection
       under a read lock and runs `QueryPipeline::execute` on the copy.
    3. Filter steps (`search`, `category`, `in_stock`, `min_price`, `max_price`)
       skip themselves when their parameter is absent; `sort` skips without a
       sort field; `paginate` always runs.
    4. `Envelope::from(outcome)` yields `{ success, data, pagination, filters }`.
*/
