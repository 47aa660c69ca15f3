// catalog/src/core/step.rs

//! Defines the structure for a single step within a pipeline.

use std::sync::Arc;

/// Predicate evaluated against the pipeline data before a step runs.
/// When it returns `true` the step is skipped.
pub type SkipCondition<TData> = Arc<dyn Fn(&TData) -> bool + Send + Sync + 'static>;

/// Definition of a pipeline step: its name, optionality and skip condition.
#[derive(Clone)]
pub struct StepDef<TData: 'static> {
  pub name: String,
  pub optional: bool,
  pub skip_if: Option<SkipCondition<TData>>,
}

impl<TData: 'static> StepDef<TData> {
  pub fn new(name: impl Into<String>, optional: bool, skip_if: Option<SkipCondition<TData>>) -> Self {
    Self {
      name: name.into(),
      optional,
      skip_if,
    }
  }

  /// Whether the skip condition (if any) holds for `data`.
  pub fn should_skip(&self, data: &TData) -> bool {
    self.skip_if.as_ref().is_some_and(|cond| cond(data))
  }
}

// SkipCondition is a closure, so Debug only reports whether one is present.
impl<TData: 'static> std::fmt::Debug for StepDef<TData> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
