// catalog_server/src/web/routes.rs

use actix_web::{error, web, HttpRequest, HttpResponse};
use catalog::Envelope;

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

pub const MSG_ROUTE_NOT_FOUND: &str = "Route not found";

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Fallback for anything the router does not match.
pub async fn not_found_handler() -> HttpResponse {
  HttpResponse::NotFound().json(Envelope::failure(MSG_ROUTE_NOT_FOUND))
}

/// Malformed JSON bodies become validation failures with the parser's message.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(vec![err.to_string()]).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(vec![err.to_string()]).into()
}

/// Extractor configuration shared by the binary and the tests.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler));
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .service(
            web::resource("")
              .route(web::get().to(product_handlers::list_products_handler))
              .route(web::post().to(product_handlers::create_product_handler)),
          )
          .service(
            web::resource("/{product_id}")
              .route(web::get().to(product_handlers::get_product_handler))
              .route(web::put().to(product_handlers::update_product_handler))
              .route(web::delete().to(product_handlers::delete_product_handler)),
          ),
      ),
  );
}
