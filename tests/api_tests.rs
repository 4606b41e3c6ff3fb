//! HTTP API integration tests
//!
//! Exercises the routes mounted by `api_routes` against an in-memory store.

mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use chrono::Utc;
use serde_json::{Value, json};

use common::MockStore;
use verso::api::services::api_routes;
use verso::errors::VersoError;
use verso::services::InspirationService;
use verso::storage::{CitySummary, CountrySummary, Inspiration, StatusCheck};

// =============================================================================
// Test Setup
// =============================================================================

macro_rules! app_with {
    ($store:expr) => {{
        let store: Arc<MockStore> = $store;
        let service = Arc::new(InspirationService::new(store.clone()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(api_routes("/api")),
        )
        .await;
        (app, store)
    }};
}

fn inspiration_body(country: &str, city: &str, kind: &str, added_by: Option<&str>) -> Value {
    let mut body = json!({
        "url": format!("https://{}.example/{}", city.to_lowercase(), kind),
        "country": country,
        "city": city,
        "type": kind,
        "theme": ["local"],
        "cost_indicator": "$$",
    });
    if let Some(name) = added_by {
        body["added_by"] = json!(name);
    }
    body
}

// =============================================================================
// Root & status
// =============================================================================

#[actix_web::test]
async fn test_greeting() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    let resp = test::call_service(&app, TestRequest::get().uri("/api/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Verso API"}));
}

#[actix_web::test]
async fn test_status_round_trip() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    for name in ["first", "second"] {
        let req = TestRequest::post()
            .uri("/api/status")
            .set_json(json!({"client_name": name}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let check: StatusCheck = test::read_body_json(resp).await;
        assert_eq!(check.client_name, name);
        assert!(!check.id.is_empty());
    }

    let resp = test::call_service(&app, TestRequest::get().uri("/api/status").to_request()).await;
    let checks: Vec<StatusCheck> = test::read_body_json(resp).await;
    let names: Vec<_> = checks.iter().map(|c| c.client_name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[actix_web::test]
async fn test_status_requires_client_name() {
    let (app, store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::post()
        .uri("/api/status")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"][0]["field"], "client_name");
    assert_eq!(store.calls(), 0);
}

// =============================================================================
// Inspirations
// =============================================================================

#[actix_web::test]
async fn test_create_inspiration_seeds_contributors() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));
    let before = Utc::now();

    let req = TestRequest::post()
        .uri("/api/inspirations")
        .set_json(inspiration_body("Japan", "Tokyo", "cafe", Some("alice")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Inspiration = test::read_body_json(resp).await;
    assert!(!created.id.is_empty());
    assert!(created.created_at >= before);
    assert_eq!(created.contributors, vec!["alice"]);

    let req = TestRequest::post()
        .uri("/api/inspirations")
        .set_json(inspiration_body("Japan", "Kyoto", "activity", None))
        .to_request();
    let created: Inspiration = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(created.contributors.is_empty());
    assert!(created.added_by.is_none());
}

#[actix_web::test]
async fn test_create_inspiration_wire_shape() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::post()
        .uri("/api/inspirations")
        .set_json(inspiration_body("France", "Paris", "cafe", Some("bob")))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(body["type"], "cafe");
    assert_eq!(body["cost_indicator"], "$$");
    assert_eq!(body["theme"], json!(["local"]));
    assert!(body["title"].is_null());
    assert!(body["created_at"].is_string());
    assert!(body.get("kind").is_none());
}

#[actix_web::test]
async fn test_create_inspiration_missing_city() {
    let (app, store) = app_with!(Arc::new(MockStore::new()));

    let mut body = inspiration_body("Japan", "Tokyo", "cafe", None);
    body.as_object_mut().unwrap().remove("city");
    let req = TestRequest::post()
        .uri("/api/inspirations")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1022);
    assert_eq!(body["data"], json!([{"field": "city", "message": "Field required"}]));
    assert_eq!(store.calls(), 0);
}

#[actix_web::test]
async fn test_create_inspiration_reports_all_violations() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::post()
        .uri("/api/inspirations")
        .set_json(json!({"url": "https://x", "type": "museum", "cost_indicator": "cheap"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    let fields: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["country", "city", "type", "cost_indicator"]);
}

#[actix_web::test]
async fn test_malformed_json_is_422() {
    let (app, store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::post()
        .uri("/api/inspirations")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"url\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.calls(), 0);
}

#[actix_web::test]
async fn test_list_inspirations_filters() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    for (country, city, kind) in [
        ("Japan", "Tokyo", "cafe"),
        ("Japan", "Tokyo", "activity"),
        ("Japan", "Osaka", "cafe"),
        ("Italy", "Rome", "cafe"),
    ] {
        let req = TestRequest::post()
            .uri("/api/inspirations")
            .set_json(inspiration_body(country, city, kind, None))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = TestRequest::get()
        .uri("/api/inspirations?country=Japan&type=cafe")
        .to_request();
    let items: Vec<Inspiration> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.country == "Japan" && i.kind.as_ref() == "cafe"));

    let req = TestRequest::get().uri("/api/inspirations").to_request();
    let items: Vec<Inspiration> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].city, "Rome");
}

#[actix_web::test]
async fn test_list_inspirations_empty_params_are_ignored() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::post()
        .uri("/api/inspirations")
        .set_json(inspiration_body("Japan", "Tokyo", "cafe", None))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri("/api/inspirations?country=&city=")
        .to_request();
    let items: Vec<Inspiration> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].city, "Tokyo");

    let req = TestRequest::get()
        .uri("/api/inspirations?country=&type=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_list_inspirations_invalid_type() {
    let (app, store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::get()
        .uri("/api/inspirations?type=invalid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"][0]["field"], "type");
    assert_eq!(store.calls(), 0);
}

// =============================================================================
// Collections
// =============================================================================

#[actix_web::test]
async fn test_japan_tokyo_alice_scenario() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::post()
        .uri("/api/inspirations")
        .set_json(inspiration_body("Japan", "Tokyo", "cafe", Some("alice")))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/api/collections/summary").to_request();
    let summary: Vec<CountrySummary> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(
        summary,
        vec![CountrySummary {
            country: "Japan".to_string(),
            count: 1,
            contributors: vec!["alice".to_string()],
        }]
    );

    let req = TestRequest::get()
        .uri("/api/collections/Japan/cities")
        .to_request();
    let cities: Vec<CitySummary> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(
        cities,
        vec![CitySummary {
            city: "Tokyo".to_string(),
            count: 1,
        }]
    );

    let req = TestRequest::get()
        .uri("/api/city/Japan/Tokyo/items?type=cafe")
        .to_request();
    let items: Vec<Inspiration> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].added_by.as_deref(), Some("alice"));

    let req = TestRequest::get()
        .uri("/api/city/Japan/Tokyo/items?type=activity")
        .to_request();
    let items: Vec<Inspiration> = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(items.is_empty());
}

#[actix_web::test]
async fn test_unknown_country_is_empty() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::get()
        .uri("/api/collections/Atlantis/cities")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cities: Vec<CitySummary> = test::read_body_json(resp).await;
    assert!(cities.is_empty());
}

#[actix_web::test]
async fn test_city_items_invalid_type() {
    let (app, _store) = app_with!(Arc::new(MockStore::new()));

    let req = TestRequest::get()
        .uri("/api/city/Japan/Tokyo/items?type=museum")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Storage failures
// =============================================================================

#[actix_web::test]
async fn test_connectivity_failure_is_503() {
    let (app, _store) = app_with!(Arc::new(MockStore::failing(
        VersoError::database_connection("connection refused")
    )));

    let req = TestRequest::get().uri("/api/collections/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1030);
}

#[actix_web::test]
async fn test_timeout_is_503() {
    let (app, _store) = app_with!(Arc::new(MockStore::failing(VersoError::timeout(
        "find_inspirations timed out"
    ))));

    let req = TestRequest::get().uri("/api/inspirations").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_operation_failure_is_500() {
    let (app, _store) = app_with!(Arc::new(MockStore::failing(
        VersoError::database_operation("disk I/O error")
    )));

    let req = TestRequest::post()
        .uri("/api/status")
        .set_json(json!({"client_name": "probe"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
