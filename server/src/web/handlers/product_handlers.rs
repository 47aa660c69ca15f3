// catalog_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::envelope::{MSG_CREATED, MSG_DELETED, MSG_UPDATED};
use catalog::{Envelope, ListQuery};
use tracing::{debug, info, instrument};

use crate::errors::{AppError, Result};
use crate::state::AppState;
use crate::validation::ProductPayload;

/// Path ids are taken as text so a non-numeric id reads as an unknown product.
fn parse_product_id(raw: &str) -> Result<u64> {
  raw.trim().parse::<u64>().map_err(|_| AppError::product_not_found())
}

/// Query pairs are taken raw so a repeated key resolves to its last value instead of failing.
#[instrument(name = "handler::list_products", skip(app_state, pairs), fields(query = ?pairs.0))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse> {
  let query = ListQuery::from_pairs(pairs.into_inner());
  let outcome = catalog::list_products(&app_state.catalog, &app_state.query_pipeline, &query)?;
  info!(
    returned = outcome.page.items.len(),
    total = outcome.page.meta.total,
    "Products listed."
  );
  Ok(HttpResponse::Ok().json(Envelope::from(outcome)))
}

#[instrument(name = "handler::get_product", skip(app_state), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let id = parse_product_id(&path)?;
  let product = catalog::get_product(&app_state.catalog, id)?;
  Ok(HttpResponse::Ok().json(Envelope::data(product)))
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<ProductPayload>,
) -> Result<HttpResponse> {
  debug!(body = ?body.0, "Create request received.");
  let input = body.into_inner().validate()?;
  let product = catalog::create_product(&app_state.catalog, input);
  Ok(HttpResponse::Created().json(Envelope::data(product).with_message(MSG_CREATED)))
}

#[instrument(name = "handler::update_product", skip(app_state, body), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: web::Json<ProductPayload>,
) -> Result<HttpResponse> {
  debug!(body = ?body.0, "Update request received.");
  let id = parse_product_id(&path)?;
  let input = body.into_inner().validate()?;
  let product = catalog::update_product(&app_state.catalog, id, input)?;
  Ok(HttpResponse::Ok().json(Envelope::data(product).with_message(MSG_UPDATED)))
}

#[instrument(name = "handler::delete_product", skip(app_state), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let id = parse_product_id(&path)?;
  let removed = catalog::delete_product(&app_state.catalog, id)?;
  Ok(HttpResponse::Ok().json(Envelope::data(removed).with_message(MSG_DELETED)))
}
