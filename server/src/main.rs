// catalog_server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use catalog_server::web::{configure_app_routes, configure_extractors, not_found_handler, BearerAuth};
use catalog_server::{telemetry, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Config is read before logging so LOG_FORMAT can pick the output.
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  telemetry::init_tracing(app_config.log_format);
  app_config.log_summary();

  tracing::info!("Starting catalog server...");

  let server_address = app_config.bind_address();
  let app_state = AppState::new(app_config).context("Failed to build the query pipeline")?;
  let auth = BearerAuth::new(app_state.config.api_token.clone());

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .configure(configure_extractors)
      .configure(configure_app_routes)
      .default_service(actix_data::to(not_found_handler))
      .wrap(auth.clone())
      .wrap(tracing_actix_web::TracingLogger::default()) // Outermost: every request gets a root span
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("Server terminated with an error")
}
