use actix_web::{
    http::{StatusCode, header},
    test,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::FixedRandom;

const UNUSED_WEBHOOK: &str = "http://127.0.0.1:1/unused";

#[actix_web::test]
async fn index_returns_success_envelope() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::Low);

    let req = test::TestRequest::get().uri("/api/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Hello World!");
    assert_eq!(body["status"], "success");
    assert!(
        body["timestamp"]
            .as_str()
            .and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
            .is_some()
    );
}

#[actix_web::test]
async fn index_renders_page_in_view_mode() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::Low);

    let req = test::TestRequest::get().uri("/hello/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("text/html"))
    );

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Hello World from Controller 2!"));
}

#[actix_web::test]
async fn root_mount_serves_json_handlers() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::High);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Hello World!");
    assert_eq!(body["status"], "success");

    let req = test::TestRequest::get().uri("/42").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], "42");
    assert_eq!(body["email"], "user42@example.com");

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({"name": "Ada", "email": "ada@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 9999);
    assert_eq!(body["data"]["name"], "Ada");
}

#[actix_web::test]
async fn root_show_does_not_shadow_named_routes() {
    let app = common::init_app!("https://hooks.example.test/proposal", FixedRandom::Low);

    let req = test::TestRequest::get().uri("/webhook-test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("text/html"))
    );

    let req = test::TestRequest::get().uri("/hello/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(String::from_utf8_lossy(&body).contains("Hello World from Controller 2!"));
}

#[actix_web::test]
async fn show_returns_synthetic_user_within_window() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::High);

    let before = Utc::now();
    let req = test::TestRequest::get().uri("/api/42").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let after = Utc::now();

    assert_eq!(body["id"], "42");
    assert_eq!(body["name"], "Sample User 42");
    assert_eq!(body["email"], "user42@example.com");
    assert!(body.get("phone").is_none());

    let created_at: DateTime<Utc> = body["created_at"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before - Duration::days(30));
    assert!(created_at <= after - Duration::days(30));
}

#[actix_web::test]
async fn show_accepts_any_identifier_in_both_mounts() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::Low);

    for uri in ["/api/abc", "/hello/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Sample User abc");

        let created_at: DateTime<Utc> = body["created_at"].as_str().unwrap().parse().unwrap();
        assert!(created_at <= Utc::now() - Duration::days(1));
    }
}

#[actix_web::test]
async fn store_echoes_validated_subset_with_id() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::High);

    let req = test::TestRequest::post()
        .uri("/api/")
        .set_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "hello",
            "is_admin": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "message": "Data received successfully",
            "data": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "hello"
            },
            "id": 9999
        })
    );
}

#[actix_web::test]
async fn store_accepts_urlencoded_form() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::Low);

    let req = test::TestRequest::post()
        .uri("/hello/")
        .set_form([
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("phone", "555-0100"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1000);
    assert_eq!(body["data"]["phone"], "555-0100");
}

#[actix_web::test]
async fn store_rejects_invalid_input_without_id() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::Low);

    let cases = [
        json!({"email": "ada@example.com"}),
        json!({"name": "Ada"}),
        json!({"name": "a".repeat(256), "email": "ada@example.com"}),
        json!({"name": "Ada", "email": "ada-at-example.com"}),
        json!({"name": ["Ada"], "email": "ada@example.com"}),
        json!({"name": "Ada", "email": "ada@example.com", "phone": "1".repeat(21)}),
    ];

    for case in cases {
        let req = test::TestRequest::post()
            .uri("/api/")
            .set_json(&case)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{case}");

        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("id").is_none(), "{case}");
        assert!(body["errors"].as_object().is_some_and(|e| !e.is_empty()));
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[actix_web::test]
async fn store_lists_every_offending_field() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::Low);

    let req = test::TestRequest::post()
        .uri("/api/")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "message": "The email field is required. (and 1 more error)",
            "errors": {
                "email": ["The email field is required."],
                "name": ["The name field is required."]
            }
        })
    );
}

#[actix_web::test]
async fn store_rejects_malformed_json() {
    let app = common::init_app!(UNUSED_WEBHOOK, FixedRandom::Low);

    let req = test::TestRequest::post()
        .uri("/api/")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("id").is_none());
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn webhook_page_shows_preview() {
    let app = common::init_app!("https://hooks.example.test/proposal", FixedRandom::Low);

    let req = test::TestRequest::get().uri("/webhook-test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("hooks.example.test"));
    assert!(body.contains("Send Test Data"));
    assert!(body.contains("components totaling $21,500 USD"));
    assert!(!body.contains("alert-danger"));
}

#[actix_web::test]
async fn webhook_page_renders_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proposal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::init_app!(format!("{}/proposal", server.uri()), FixedRandom::Low);

    let req = test::TestRequest::post().uri("/webhook-test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Webhook sent successfully"));
    assert!(body.contains("&quot;ok&quot;: true"));
    assert!(!body.contains("alert-danger"));
}

#[actix_web::test]
async fn webhook_page_renders_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proposal"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let app = common::init_app!(format!("{}/proposal", server.uri()), FixedRandom::Low);

    let req = test::TestRequest::post().uri("/webhook-test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("HTTP 404: Not Found - not found"));
    assert!(!body.contains("Webhook sent successfully"));
}

#[actix_web::test]
async fn api_webhook_test_reports_outcome_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/proposal"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "bad request",
            "hint": "check payload"
        })))
        .mount(&server)
        .await;

    let app = common::init_app!(format!("{}/proposal", server.uri()), FixedRandom::Low);

    let req = test::TestRequest::post()
        .uri("/api/webhook-test")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "status": "failed",
            "error": "HTTP 500: Internal Server Error - bad request check payload"
        })
    );
}
