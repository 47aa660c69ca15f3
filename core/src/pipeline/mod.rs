// catalog/src/pipeline/mod.rs

//! Defines the `Pipeline<T>` struct, its construction, modification, and execution logic.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Pipeline;
