// catalog/src/core/control.rs

//! Signals for controlling pipeline flow and the outcome of a pipeline run.

/// Signal from a handler indicating whether the pipeline should continue or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  /// Continue with the remaining handlers and steps.
  Continue,
  /// Halt the pipeline. No further handlers in this or later steps run.
  Stop,
}

/// Outcome of a full pipeline execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every non-skipped step ran to completion.
  Completed,
  /// A handler returned `PipelineControl::Stop`.
  Stopped,
}
