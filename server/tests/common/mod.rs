// catalog_server/tests/common/mod.rs
#![allow(dead_code)]

use catalog_server::{AppConfig, AppState};
use secrecy::SecretString;
use std::sync::Arc;

pub const TOKEN: &str = "test-token";

/// Seeded state with `TOKEN` configured.
pub fn test_state() -> AppState {
  state_with_token(Some(TOKEN))
}

pub fn state_with_token(token: Option<&str>) -> AppState {
  let config = AppConfig {
    api_token: token.map(|t| Arc::new(SecretString::from(t.to_string()))),
    ..AppConfig::default()
  };
  AppState::new(config).expect("query pipeline builds")
}

pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
  (actix_web::http::header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Builds the full service stack the binary runs, minus the request logger.
macro_rules! test_app {
  ($state:expr) => {{
    let state: catalog_server::AppState = $state;
    let auth = catalog_server::web::BearerAuth::new(state.config.api_token.clone());
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new(state))
        .configure(catalog_server::web::configure_extractors)
        .configure(catalog_server::web::configure_app_routes)
        .default_service(actix_web::web::to(catalog_server::web::not_found_handler))
        .wrap(auth),
    )
    .await
  }};
}
