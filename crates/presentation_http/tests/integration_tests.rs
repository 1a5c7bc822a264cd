//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::services::BookingService;
use axum_test::TestServer;
use infrastructure::config::{CatalogConfig, DatabaseConfig, MomoHandoffConfig};
use infrastructure::{SqliteCounterStore, create_pool};
use integration_whatsapp::PaymentHandoff;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;

fn create_test_state() -> AppState {
    let catalog = Arc::new(
        CatalogConfig::default()
            .build()
            .expect("default catalog must validate"),
    );

    let pool = create_pool(&DatabaseConfig {
        path: ":memory:".to_string(),
        max_connections: 1,
        run_migrations: true,
    })
    .expect("in-memory pool");
    let counters = Arc::new(SqliteCounterStore::new(Arc::new(pool)));

    let handoff = PaymentHandoff::new(MomoHandoffConfig::default().to_handoff_config())
        .expect("default handoff config");

    AppState {
        booking_service: Arc::new(BookingService::new(Arc::clone(&catalog), counters)),
        catalog,
        handoff: Arc::new(handoff),
        booking_sink: None,
    }
}

fn create_test_server() -> TestServer {
    TestServer::new(create_router(create_test_state())).expect("Failed to create test server")
}

fn valid_booking() -> serde_json::Value {
    json!({
        "full_name": "Ama Serwaa",
        "phone": "059 123 4567",
        "payer_name": "Kofi Serwaa",
        "destination": "Kumasi",
        "pickup_point": "Circle Odawna",
        "bus_type": "sprinter"
    })
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_without_bridge_is_ready() {
    let server = create_test_server();

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["sheets"]["configured"], false);
}

// ============ Destination Endpoint Tests ============

#[tokio::test]
async fn destinations_list_the_route_sheet() {
    let server = create_test_server();

    let response = server.get("/v1/destinations").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let destinations = body.as_array().expect("array of destinations");
    assert_eq!(destinations.len(), 8);

    let kumasi = destinations
        .iter()
        .find(|d| d["name"] == "Kumasi")
        .expect("Kumasi is on the route sheet");
    assert_eq!(kumasi["short_code"], "KUM");
    assert_eq!(kumasi["sprinter_price"], 117.0);
    assert_eq!(kumasi["vip_available"], true);

    let tema = destinations
        .iter()
        .find(|d| d["name"] == "Tema")
        .expect("Tema is on the route sheet");
    assert_eq!(tema["vip_available"], false);
    assert!(tema.get("vip_price").is_none());
}

// ============ Booking Endpoint Tests ============

#[tokio::test]
async fn booking_submission_returns_created() {
    let server = create_test_server();

    let response = server.post("/v1/bookings").json(&valid_booking()).await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();

    let reference = body["booking"]["reference"]
        .as_str()
        .expect("reference string");
    assert!(reference.starts_with("KUM/101-"));
    assert_eq!(body["booking"]["phone"], "0591234567");
    assert_eq!(body["booking"]["price"], 117.0);
    assert_eq!(body["booking"]["source"], "web");

    let message = body["payment"]["message"].as_str().expect("message");
    assert!(message.contains("Amount: GHS 117.00"));
    assert!(message.contains(reference));

    let link = body["payment"]["whatsapp_url"].as_str().expect("link");
    assert!(link.starts_with("https://wa.me/233598106751?text="));
    assert!(!link.contains('\n'));

    let steps = body["payment"]["momo"]["steps"]
        .as_array()
        .expect("momo steps");
    assert_eq!(steps.len(), 3);
}

#[tokio::test]
async fn second_booking_advances_the_seat_index() {
    let server = create_test_server();

    server.post("/v1/bookings").json(&valid_booking()).await;
    let response = server.post("/v1/bookings").json(&valid_booking()).await;

    let body: serde_json::Value = response.json();
    let reference = body["booking"]["reference"].as_str().expect("reference");
    assert!(reference.starts_with("KUM/102-"));
}

#[tokio::test]
async fn missing_field_returns_bad_request() {
    let server = create_test_server();

    let mut booking = valid_booking();
    booking["pickup_point"] = json!("   ");
    let response = server.post("/v1/bookings").json(&booking).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "bad_request");
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("missing required field")
    );
}

#[tokio::test]
async fn invalid_phone_returns_bad_request() {
    let server = create_test_server();

    let mut booking = valid_booking();
    booking["phone"] = json!("+233598106751");
    let response = server.post("/v1/bookings").json(&booking).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("invalid phone format")
    );
}

#[tokio::test]
async fn vip_on_sprinter_only_route_returns_bad_request() {
    let server = create_test_server();

    let mut booking = valid_booking();
    booking["destination"] = json!("Tema");
    booking["bus_type"] = json!("vip");
    let response = server.post("/v1/bookings").json(&booking).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("no valid price")
    );
}

#[tokio::test]
async fn unknown_destination_returns_bad_request() {
    let server = create_test_server();

    let mut booking = valid_booking();
    booking["destination"] = json!("Takoradi");
    let response = server.post("/v1/bookings").json(&booking).await;

    response.assert_status_bad_request();
}
