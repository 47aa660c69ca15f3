// catalog_server/tests/auth_tests.rs

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{bearer, state_with_token, test_state, TOKEN};
use serde_json::{json, Value};

fn new_product() -> Value {
  json!({ "name": "Lamp", "price": 25, "category": "Furniture" })
}

#[actix_web::test]
async fn reads_need_no_credentials() {
  let app = test_app!(state_with_token(None));
  let req = test::TestRequest::get().uri("/api/products/1").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn missing_header_is_rejected_with_401() {
  let app = test_app!(test_state());
  let req = test::TestRequest::post().uri("/api/products").set_json(new_product()).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({
      "success": false,
      "message": "Authentication required. Please provide a valid Bearer token."
    })
  );
}

#[actix_web::test]
async fn wrong_token_is_rejected_with_403_and_store_is_untouched() {
  let app = test_app!(test_state());
  let req = test::TestRequest::delete()
    .uri("/api/products/1")
    .insert_header(bearer("not-the-token"))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "success": false, "message": "Invalid or expired token" }));

  let req = test::TestRequest::get().uri("/api/products/1").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn writes_are_refused_when_no_token_is_configured() {
  let app = test_app!(state_with_token(None));
  let req = test::TestRequest::put()
    .uri("/api/products/1")
    .insert_header(bearer(TOKEN))
    .set_json(new_product())
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn auth_runs_before_validation() {
  let app = test_app!(test_state());
  let req = test::TestRequest::post()
    .uri("/api/products")
    .set_json(json!({ "price": "free" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
