// catalog_server/src/web/mod.rs

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::BearerAuth;
pub use routes::{configure_app_routes, configure_extractors, not_found_handler};
