pub mod context;
pub mod control;
pub mod step;

pub use context::Handler;
pub use control::{PipelineControl, PipelineResult};
pub use step::{SkipCondition, StepDef};
