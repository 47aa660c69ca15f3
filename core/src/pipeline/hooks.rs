// catalog/src/pipeline/hooks.rs

//! Methods for registering `before`, `on`, and `after` handlers for pipeline steps.

use tracing::{event, Level};

use crate::core::context::Handler;
use crate::core::control::PipelineControl;
use crate::error::{CatalogError, CatalogResult};
use crate::pipeline::definition::Pipeline;

#[derive(Debug, Clone, Copy)]
enum Phase {
  Before,
  On,
  After,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<CatalogError> + Send + Sync + 'static,
{
  /// Registers a `before` hook for a given step.
  ///
  /// The handler may return any error type convertible into the pipeline's `Err`.
  pub fn before_step<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) -> CatalogResult<()>
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.register(Phase::Before, step_name, handler_fn)
  }

  /// Registers an `on` hook for a given step.
  pub fn on_step<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) -> CatalogResult<()>
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.register(Phase::On, step_name, handler_fn)
  }

  /// Registers an `after` hook for a given step.
  pub fn after_step<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) -> CatalogResult<()>
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.register(Phase::After, step_name, handler_fn)
  }

  fn register<UserProvidedErr>(
    &mut self,
    phase: Phase,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) -> CatalogResult<()>
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.ensure_step_exists(step_name)?;
    let final_handler: Handler<TData, Err> = Box::new(move |data: &mut TData| handler_fn(data).map_err(Into::into));
    let table = match phase {
      Phase::Before => &mut self.before,
      Phase::On => &mut self.on,
      Phase::After => &mut self.after,
    };
    table.entry(step_name.to_string()).or_default().push(final_handler);
    event!(Level::TRACE, %step_name, ?phase, "Handler registered.");
    Ok(())
  }
}
