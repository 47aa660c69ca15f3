// catalog/src/pipeline/definition.rs

//! Contains the `Pipeline<TData, Err>` struct definition and methods for its
//! construction and structural modification.

use crate::core::context::Handler;
use crate::core::step::{SkipCondition, StepDef};
use crate::error::{CatalogError, CatalogResult};
use std::collections::HashMap;

/// An ordered list of named steps, each with `before`, `on` and `after` handlers,
/// run against a single `TData` value.
///
/// `Err` is the error type handlers return. It must be constructible from
/// `CatalogError` so that setup failures (e.g. a non-optional step without
/// handlers) can be reported through the same channel.
pub struct Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<CatalogError> + Send + Sync + 'static,
{
  /// Ordered list of step definitions for this pipeline.
  pub(crate) steps: Vec<StepDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<CatalogError> + Send + Sync + 'static,
{
  /// Creates a new `Pipeline` with an initial set of step definitions.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<TData>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional, skip_cond_opt)| StepDef::new(*name, *optional, skip_cond_opt.clone()))
      .collect();

    Self {
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  /// Step names in execution order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  pub fn has_step(&self, step_name: &str) -> bool {
    self.steps.iter().any(|s| s.name == step_name)
  }

  fn position_of(&self, step_name: &str) -> CatalogResult<usize> {
    self
      .steps
      .iter()
      .position(|s| s.name == step_name)
      .ok_or_else(|| CatalogError::StepNotFound {
        step_name: step_name.to_string(),
      })
  }

  pub(crate) fn ensure_step_exists(&self, step_name: &str) -> CatalogResult<()> {
    self.position_of(step_name).map(|_| ())
  }

  fn ensure_step_not_exists(&self, step_name: &str) -> CatalogResult<()> {
    if self.has_step(step_name) {
      return Err(CatalogError::DuplicateStep {
        step_name: step_name.to_string(),
      });
    }
    Ok(())
  }

  // --- Basic Step Manipulation Methods ---

  pub fn insert_before_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
    skip_if: Option<SkipCondition<TData>>,
  ) -> CatalogResult<()> {
    let idx = self.position_of(existing_step_name)?;
    let name_str: String = new_step_name.into();
    self.ensure_step_not_exists(&name_str)?;
    self.steps.insert(idx, StepDef::new(name_str, optional, skip_if));
    Ok(())
  }

  pub fn insert_after_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
    skip_if: Option<SkipCondition<TData>>,
  ) -> CatalogResult<()> {
    let idx = self.position_of(existing_step_name)?;
    let name_str: String = new_step_name.into();
    self.ensure_step_not_exists(&name_str)?;
    self.steps.insert(idx + 1, StepDef::new(name_str, optional, skip_if));
    Ok(())
  }

  /// Removes a step and every handler registered for it. Removing an unknown step is a no-op.
  pub fn remove_step(&mut self, step_name: &str) {
    if let Ok(idx) = self.position_of(step_name) {
      self.steps.remove(idx);
      self.before.remove(step_name);
      self.on.remove(step_name);
      self.after.remove(step_name);
    }
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) -> CatalogResult<()> {
    let idx = self.position_of(step_name)?;
    self.steps[idx].optional = optional;
    Ok(())
  }

  pub fn set_skip_condition(&mut self, step_name: &str, skip_if: Option<SkipCondition<TData>>) -> CatalogResult<()> {
    let idx = self.position_of(step_name)?;
    self.steps[idx].skip_if = skip_if;
    Ok(())
  }
}

impl<TData, Err> std::fmt::Debug for Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<CatalogError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline").field("steps", &self.steps).finish_non_exhaustive()
  }
}
