// catalog_server/src/web/middleware/mod.rs

pub mod auth;

pub use auth::BearerAuth;
