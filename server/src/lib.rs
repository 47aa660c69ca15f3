// catalog_server/src/lib.rs

//! HTTP surface for the product catalog: configuration, bearer auth, payload
//! validation and the actix-web routes over the `catalog` crate.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod validation;
pub mod web;

pub use config::{AppConfig, LogFormat};
pub use errors::AppError;
pub use state::AppState;
