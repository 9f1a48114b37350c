// HTTP API tests for Admit Algo

use actix_web::{test, web, App};
use admit_algo::core::Matcher;
use admit_algo::routes::{self, AppState};
use admit_algo::services::{CacheManager, CatalogStore, MemoryCatalog};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state() -> AppState {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
    let catalog = MemoryCatalog::from_path(path).expect("seed catalog should load");

    AppState {
        store: Arc::new(CatalogStore::from(catalog)),
        cache: Arc::new(CacheManager::in_memory(100, 60)),
        matcher: Matcher::with_default_weights(),
        default_limit: 10,
        max_limit: 15,
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["cache"]["redis_enabled"], false);
}

#[actix_web::test]
async fn test_list_universities() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/universities").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 20);
    assert_eq!(body["universities"][0]["competitionLevel"], "Very High");
}

#[actix_web::test]
async fn test_recommendations_for_stored_student() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "studentId": "s1", "limit": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let matches = body["matches"].as_array().unwrap();

    assert_eq!(matches.len(), 5);
    assert_eq!(body["totalCandidates"], 20);
    for pair in matches.windows(2) {
        assert!(pair[0]["matchScore"].as_u64() >= pair[1]["matchScore"].as_u64());
    }
    for m in matches {
        assert!(m["probability"].as_u64().unwrap() <= 100);
        assert!(m["probabilityLevel"].is_string());
    }
}

#[actix_web::test]
async fn test_recommendations_limit_is_capped() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "studentId": "s1", "limit": 500 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matches"].as_array().unwrap().len(), 15);
}

#[actix_web::test]
async fn test_recommendations_default_and_zero_limit() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "student": { "hscMarks": 66, "unit": "Arts", "city": "Khulna" } }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["matches"].as_array().unwrap().len(), 10);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "studentId": "s1", "limit": 0 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["matches"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_recommendations_requires_student() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "limit": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_unknown_student_is_404() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({ "studentId": "nobody" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_malformed_json_is_400_json() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
    assert_eq!(body["statusCode"], 400);
}

#[actix_web::test]
async fn test_probability_uses_stored_application() {
    let app = init_app!();

    // s1 applied to university 1 with marks 72 against a required 65
    let req = test::TestRequest::post()
        .uri("/api/v1/probability")
        .set_json(json!({ "studentId": "s1", "universityId": "1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["universityId"], "1");
    assert_eq!(body["probability"], 24);
    assert_eq!(body["probabilityLevel"], "Low");
}

#[actix_web::test]
async fn test_probability_inline_student() {
    let app = init_app!();

    // 60 vs 75 -> 20, +2.4, * 0.5, -2 = 9.2
    let req = test::TestRequest::post()
        .uri("/api/v1/probability")
        .set_json(json!({ "student": { "hscMarks": 60, "unit": "Science" }, "universityId": "1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["probability"], 9);
}

#[actix_web::test]
async fn test_probability_unknown_university() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/probability")
        .set_json(json!({ "studentId": "s1", "universityId": "999" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_circular_summary_from_text() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/circulars/summary")
        .set_json(json!({ "text": "Deadline 12/05/2025. Merit based selection." }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["summary"]["deadline"], "deadline 12/05/2025");
    assert_eq!(body["summary"]["importantNotes"][0], "Selection based on merit");
    assert!(body["formatted"].as_str().unwrap().starts_with("Deadline: deadline 12/05/2025 | "));
}

#[actix_web::test]
async fn test_circular_summary_from_university() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/circulars/summary")
        .set_json(json!({ "universityId": "1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["summary"]["deadline"], "deadline: 11/03/2025");
    assert_eq!(body["summary"]["examDate"], "admission test date: 2/04/2025");
    assert_eq!(body["summary"]["eligibility"], "Minimum GPA: 3.50 with SSC and HSC certificates");
}

#[actix_web::test]
async fn test_circular_summary_missing_circular() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/circulars/summary")
        .set_json(json!({ "universityId": "20" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
}
