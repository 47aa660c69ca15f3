// catalog/src/core/context.rs

//! Defines the `Handler<TData, Err>` type used by pipeline steps.

use crate::core::control::PipelineControl;

/// Type alias for a pipeline step handler.
///
/// A handler receives exclusive access to the pipeline data for the duration of
/// the call and returns whether the pipeline should carry on.
///
/// Handlers are synchronous: every step of a catalog query completes within the
/// request that started it, so there is nothing to await.
pub type Handler<TData, Err> = Box<dyn Fn(&mut TData) -> Result<PipelineControl, Err> + Send + Sync>;
