// catalog/src/pipeline/execution.rs

//! Contains the `Pipeline::run()` method, responsible for executing the pipeline's steps and handlers.

use crate::core::context::Handler;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::error::CatalogError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

/// What a phase of handlers decided.
enum PhaseOutcome {
  Continue,
  Stopped,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<CatalogError> + Send + Sync + 'static,
{
  /// Executes the pipeline against `data`.
  ///
  /// Steps run in order. A step whose skip condition holds is skipped; an optional
  /// step with no handlers is skipped; a non-optional step with no handlers fails
  /// with `CatalogError::HandlerMissing`. The first handler error aborts the run.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      pipeline_data_type = %std::any::type_name::<TData>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub fn run(&self, data: &mut TData) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name_str = step_def.name.as_str();

      let step_span = span!(
        Level::DEBUG,
        "pipeline_step_execution",
        step_name = step_name_str,
        step_index = step_idx,
        optional = step_def.optional
      );
      let _step_span_guard = step_span.enter();

      if step_def.should_skip(data) {
        event!(Level::DEBUG, "Step skipped due to 'skip_if' condition.");
        continue;
      }

      let before = self.before.get(step_name_str).filter(|v| !v.is_empty());
      let on = self.on.get(step_name_str).filter(|v| !v.is_empty());
      let after = self.after.get(step_name_str).filter(|v| !v.is_empty());

      if before.is_none() && on.is_none() && after.is_none() {
        if step_def.optional {
          event!(Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(Level::ERROR, "Non-optional step has no handlers.");
        return Err(Err::from(CatalogError::HandlerMissing {
          step_name: step_def.name.clone(),
        }));
      }

      for (phase, handlers) in [("before", before), ("on", on), ("after", after)] {
        if let Some(handlers) = handlers {
          if let PhaseOutcome::Stopped = run_phase(phase, handlers, data)? {
            return Ok(PipelineResult::Stopped);
          }
        }
      }
      event!(Level::TRACE, "Step processing finished successfully.");
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(PipelineResult::Completed)
  }
}

fn run_phase<TData, Err>(phase: &str, handlers: &[Handler<TData, Err>], data: &mut TData) -> Result<PhaseOutcome, Err>
where
  Err: std::error::Error,
{
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    let handler_span = span!(Level::TRACE, "step_handler", phase = phase, handler_index = handler_idx);
    let _handler_span_guard = handler_span.enter();
    match handler_fn(&mut *data) {
      Ok(PipelineControl::Continue) => {}
      Ok(PipelineControl::Stop) => {
        event!(Level::INFO, phase = phase, "Pipeline stopped by a handler.");
        return Ok(PhaseOutcome::Stopped);
      }
      Err(e) => {
        event!(Level::ERROR, error = %e, phase = phase, "Handler failed.");
        return Err(e);
      }
    }
  }
  Ok(PhaseOutcome::Continue)
}
