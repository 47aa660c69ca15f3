// catalog/src/query/pipeline.rs

//! The read path: filter steps, then sort, then paginate, run as one pipeline.

use crate::core::control::{PipelineControl, PipelineResult};
use crate::core::step::SkipCondition;
use crate::error::{CatalogError, CatalogResult};
use crate::model::Product;
use crate::pipeline::Pipeline;
use crate::query::filters::{FilterKind, ProductFilter};
use crate::query::paginate::{paginate, Page};
use crate::query::params::{AppliedFilters, ListQuery, ParsedQuery};
use crate::query::sort::sort_products;
use crate::store::Catalog;
use std::sync::Arc;
use tracing::{debug, instrument};

pub const SORT_STEP: &str = "sort";
pub const PAGINATE_STEP: &str = "paginate";

/// Per-request data flowing through the query pipeline.
#[derive(Debug, Clone)]
pub struct QueryContext {
  pub query: ParsedQuery,
  pub filters: Vec<ProductFilter>,
  /// The working set: the snapshot, narrowed and reordered by earlier steps.
  pub items: Vec<Product>,
  pub page: Option<Page<Product>>,
}

impl QueryContext {
  pub fn new(query: ParsedQuery, items: Vec<Product>) -> Self {
    let filters = ProductFilter::from_query(&query);
    Self {
      query,
      filters,
      items,
      page: None,
    }
  }

  pub fn filter(&self, kind: FilterKind) -> Option<&ProductFilter> {
    self.filters.iter().find(|f| f.kind() == kind)
  }
}

/// Result of a list query: one page of products plus the echoed filters.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
  pub page: Page<Product>,
  pub filters: AppliedFilters,
}

/// Filter → sort → paginate over a catalog snapshot. Never mutates the catalog.
pub struct QueryPipeline {
  pipeline: Pipeline<QueryContext, CatalogError>,
}

impl std::fmt::Debug for QueryPipeline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("QueryPipeline").field("steps", &self.pipeline.step_names()).finish()
  }
}

impl QueryPipeline {
  pub fn new() -> CatalogResult<Self> {
    let mut step_defs: Vec<(&str, bool, Option<SkipCondition<QueryContext>>)> = FilterKind::ALL
      .iter()
      .map(|kind| {
        let kind = *kind;
        let skip: SkipCondition<QueryContext> = Arc::new(move |ctx: &QueryContext| ctx.filter(kind).is_none());
        (kind.step_name(), false, Some(skip))
      })
      .collect();
    let skip_sort: SkipCondition<QueryContext> = Arc::new(|ctx: &QueryContext| ctx.query.sort.is_none());
    step_defs.push((SORT_STEP, false, Some(skip_sort)));
    step_defs.push((PAGINATE_STEP, false, None));

    let mut pipeline = Pipeline::<QueryContext, CatalogError>::new(&step_defs);

    for kind in FilterKind::ALL {
      pipeline.on_step(kind.step_name(), move |ctx: &mut QueryContext| {
        if let Some(filter) = ctx.filter(kind).cloned() {
          let before = ctx.items.len();
          ctx.items.retain(|p| filter.matches(p));
          debug!(filter = kind.step_name(), before, after = ctx.items.len(), "Filter applied.");
        }
        Ok::<_, CatalogError>(PipelineControl::Continue)
      })?;
    }

    pipeline.on_step(SORT_STEP, |ctx: &mut QueryContext| {
      if let Some(spec) = &ctx.query.sort {
        let items = std::mem::take(&mut ctx.items);
        ctx.items = sort_products(items, spec);
      }
      Ok::<_, CatalogError>(PipelineControl::Continue)
    })?;

    pipeline.on_step(PAGINATE_STEP, |ctx: &mut QueryContext| {
      let items = std::mem::take(&mut ctx.items);
      ctx.page = Some(paginate(items, ctx.query.page));
      Ok::<_, CatalogError>(PipelineControl::Continue)
    })?;

    Ok(Self { pipeline })
  }

  /// Access to the underlying pipeline, e.g. to attach `before`/`after` hooks.
  pub fn pipeline_mut(&mut self) -> &mut Pipeline<QueryContext, CatalogError> {
    &mut self.pipeline
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.pipeline.step_names()
  }

  /// Runs the pipeline over `products` (already a private copy).
  #[instrument(name = "QueryPipeline::execute", skip_all, fields(snapshot_len = products.len()), err(Display))]
  pub fn execute(&self, products: Vec<Product>, query: &ListQuery) -> CatalogResult<QueryOutcome> {
    let mut ctx = QueryContext::new(query.parse(), products);
    let result = self.pipeline.run(&mut ctx)?;
    let page = ctx.page.take().ok_or_else(|| {
      CatalogError::Internal(format!("query pipeline finished ({:?}) without producing a page", result))
    })?;
    if result == PipelineResult::Stopped {
      debug!("Query pipeline stopped early after paginating.");
    }
    Ok(QueryOutcome {
      page,
      filters: query.applied_filters(),
    })
  }
}

/// Lists products from the current catalog snapshot.
pub fn list_products(catalog: &Catalog, pipeline: &QueryPipeline, query: &ListQuery) -> CatalogResult<QueryOutcome> {
  pipeline.execute(catalog.snapshot(), query)
}
