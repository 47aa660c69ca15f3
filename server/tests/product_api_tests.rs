// catalog_server/tests/product_api_tests.rs

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use catalog::{Envelope, Product};
use common::{bearer, test_state, TOKEN};
use serde_json::{json, Value};

fn ids(body: &Value) -> Vec<u64> {
  body["data"]
    .as_array()
    .expect("data is an array")
    .iter()
    .map(|p| p["id"].as_u64().expect("numeric id"))
    .collect()
}

#[actix_web::test]
async fn health_reports_ok() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/health").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn list_returns_seed_with_pagination_and_filters() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/products").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(true));
  assert_eq!(ids(&body), vec![1, 2, 3]);
  assert_eq!(body["pagination"], json!({ "page": 1, "limit": 10, "total": 3, "totalPages": 1 }));
  assert_eq!(
    body["filters"],
    json!({ "search": null, "category": null, "inStock": null, "minPrice": null, "maxPrice": null })
  );
  assert!(body.get("message").is_none());
}

#[actix_web::test]
async fn category_with_price_sort_orders_ids() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get()
    .uri("/api/products?category=Electronics&sort=price&order=asc")
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec![2, 1]);
  assert_eq!(body["filters"]["category"], json!("Electronics"));
}

#[actix_web::test]
async fn second_page_of_two_holds_last_item() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/products?limit=2&page=2").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec![3]);
  assert_eq!(body["pagination"]["total"], json!(3));
  assert_eq!(body["pagination"]["totalPages"], json!(2));
}

#[actix_web::test]
async fn unparsable_bounds_are_ignored() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/products?minPrice=abc").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec![1, 2, 3]);
  assert_eq!(body["filters"]["minPrice"], json!("abc"));
}

#[actix_web::test]
async fn search_and_stock_filters_combine() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/products?q=chair&inStock=false").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec![3]);
}

#[actix_web::test]
async fn repeated_list_keys_use_the_last_value() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/products?q=laptop&q=chair").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(ids(&body), vec![3]);
  assert_eq!(body["filters"]["search"], json!("chair"));
}

#[actix_web::test]
async fn decimal_limit_is_truncated() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/products?limit=2.5&page=2").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(ids(&body), vec![3]);
  assert_eq!(body["pagination"]["limit"], json!(2));
}

#[actix_web::test]
async fn get_one_and_unknown_ids() {
  let app = test_app!(test_state());

  let req = test::TestRequest::get().uri("/api/products/2").to_request();
  let body: Envelope<Product> = test::call_and_read_body_json(&app, req).await;
  assert!(body.success);
  assert_eq!(body.data.map(|p| p.name), Some("Smartphone".to_string()));

  for uri in ["/api/products/99", "/api/products/abc"] {
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Product not found" }));
  }
}

#[actix_web::test]
async fn create_assigns_next_id_and_defaults() {
  let app = test_app!(test_state());
  let req = test::TestRequest::post()
    .uri("/api/products")
    .insert_header(bearer(TOKEN))
    .set_json(json!({ "name": "Lamp", "price": 25.5, "category": "Furniture" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], json!("Product created successfully"));
  assert_eq!(body["data"]["id"], json!(4));
  assert_eq!(body["data"]["description"], json!(""));
  assert_eq!(body["data"]["inStock"], json!(true));
  assert!(body["data"]["createdAt"].is_string());
  assert!(body["data"].get("updatedAt").is_none());

  let req = test::TestRequest::get().uri("/api/products/4").to_request();
  let fetched: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(fetched["data"], body["data"]);
}

#[actix_web::test]
async fn update_merges_and_stamps() {
  let app = test_app!(test_state());
  let req = test::TestRequest::put()
    .uri("/api/products/3")
    .insert_header(bearer(TOKEN))
    .set_json(json!({ "name": "Office Chair", "price": 149.0, "category": "Furniture" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], json!("Product updated successfully"));
  assert_eq!(body["data"]["id"], json!(3));
  assert_eq!(body["data"]["name"], json!("Office Chair"));
  assert_eq!(body["data"]["inStock"], json!(false));
  assert!(body["data"]["updatedAt"].is_string());
}

#[actix_web::test]
async fn update_of_unknown_id_is_not_found() {
  let app = test_app!(test_state());
  let req = test::TestRequest::put()
    .uri("/api/products/42")
    .insert_header(bearer(TOKEN))
    .set_json(json!({ "name": "Ghost", "price": 1, "category": "None" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_returns_record_and_retires_id() {
  let app = test_app!(test_state());
  let req = test::TestRequest::delete()
    .uri("/api/products/3")
    .insert_header(bearer(TOKEN))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["message"], json!("Product deleted successfully"));
  assert_eq!(body["data"]["name"], json!("Desk Chair"));

  let req = test::TestRequest::get().uri("/api/products/3").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::post()
    .uri("/api/products")
    .insert_header(bearer(TOKEN))
    .set_json(json!({ "name": "Stool", "price": 30, "category": "Furniture" }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["data"]["id"], json!(4));
}

#[actix_web::test]
async fn invalid_payload_lists_every_problem() {
  let app = test_app!(test_state());
  let req = test::TestRequest::post()
    .uri("/api/products")
    .insert_header(bearer(TOKEN))
    .set_json(json!({ "price": -3 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(false));
  assert_eq!(body["message"], json!("Validation failed"));
  assert_eq!(
    body["errors"],
    json!(["name is required", "category is required", "price must be a non-negative number"])
  );

  let req = test::TestRequest::get().uri("/api/products").to_request();
  let list: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(list["pagination"]["total"], json!(3));
}

#[actix_web::test]
async fn malformed_json_is_a_validation_failure() {
  let app = test_app!(test_state());
  let req = test::TestRequest::post()
    .uri("/api/products")
    .insert_header(bearer(TOKEN))
    .insert_header(("content-type", "application/json"))
    .set_payload("{ not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], json!("Validation failed"));
  assert!(body["errors"].as_array().is_some_and(|e| e.len() == 1));
}

#[actix_web::test]
async fn unmatched_routes_get_envelope_404() {
  let app = test_app!(test_state());
  let req = test::TestRequest::get().uri("/api/orders").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "success": false, "message": "Route not found" }));
}
