// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper.

use catalog::{CatalogError, ListQuery, PipelineControl, Product};
use tracing::Level;

// --- Generic pipeline test context ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Catalog framework error: {0}")]
  Catalog(String), // Debug text of the CatalogError, so TestError stays Eq.

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<CatalogError> for TestError {
  fn from(err: CatalogError) -> Self {
    TestError::Catalog(format!("{:?}", err))
  }
}

// --- Common Handler Creators ---
pub fn create_simple_handler(
  step_name: &'static str,
  message_to_append: &'static str,
) -> impl Fn(&mut TestContext) -> Result<PipelineControl, TestError> + Send + Sync + 'static {
  move |ctx: &mut TestContext| {
    ctx.counter += 1;
    ctx.message.push_str(message_to_append);
    ctx.steps_executed.push(step_name.to_string());
    tracing::debug!(target: "test_handlers", step = %step_name, "executed, counter: {}", ctx.counter);
    if ctx.should_stop_at.as_deref() == Some(step_name) {
      return Ok(PipelineControl::Stop);
    }
    Ok(PipelineControl::Continue)
  }
}

pub fn create_failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(&mut TestContext) -> Result<PipelineControl, TestError> + Send + Sync + 'static {
  move |ctx: &mut TestContext| {
    ctx.steps_executed.push(step_name.to_string());
    tracing::warn!(target: "test_handlers", step = %step_name, "failing with: '{}'", error_message);
    Err(TestError::Handler(error_message.to_string()))
  }
}

// --- Catalog fixtures ---

/// Builds a `ListQuery` from `key=value` pairs, the way a query string would arrive.
pub fn query(pairs: &[(&str, &str)]) -> ListQuery {
  ListQuery::from_pairs(pairs.iter().copied())
}

pub fn ids(products: &[Product]) -> Vec<u64> {
  products.iter().map(|p| p.id).collect()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
