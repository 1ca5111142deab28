//! API tests with mocked collaborators.
//!
//! These tests run the full router in-process with mock payment and seat
//! allocation.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use cinema_tickets_core::{metrics::PURCHASES_TOTAL, CatalogueConfig, PaymentError, TicketType};

use common::TestFixture;

// =============================================================================
// Basic API Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_catalogue_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/catalogue").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["max_tickets"], 25);

    let types = response.body["ticket_types"].as_array().unwrap();
    assert_eq!(types.len(), 3);
    assert_eq!(types[0]["type"], "ADULT");
    assert_eq!(types[0]["price"], 25);
    assert_eq!(types[0]["role"], "escort");
    assert_eq!(types[2]["type"], "INFANT");
    assert_eq!(types[2]["requires_seat"], false);
}

#[tokio::test]
async fn test_config_endpoint() {
    let fixture = TestFixture::with_catalogue(CatalogueConfig::default().with_max_tickets(9));
    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["catalogue"]["max_tickets"], 9);
    assert_eq!(response.body["server"]["port"], 8080);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();
    fixture.get("/api/v1/health").await;

    let response = fixture.get("/metrics").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("cinema_http_requests_total"));
}

// =============================================================================
// Purchase Tests
// =============================================================================

#[tokio::test]
async fn test_purchase_success() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/purchases",
            json!({
                "account_id": 1,
                "tickets": [
                    { "ticket_type": "ADULT", "count": 2 },
                    { "ticket_type": "CHILD", "count": 1 },
                    { "ticket_type": "INFANT", "count": 1 }
                ]
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["account_id"], 1);
    assert_eq!(response.body["total_amount"], 65);
    assert_eq!(response.body["total_seats"], 3);

    let charges = fixture.payment.recorded_charges().await;
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].amount, 65);
    let reservations = fixture.seats.recorded_reservations().await;
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].seats, 3);
}

#[tokio::test]
async fn test_purchase_rejections() {
    let cases = [
        (json!({ "account_id": 0, "tickets": [{ "ticket_type": "ADULT", "count": 1 }] }), "invalid_account"),
        (json!({ "account_id": 1, "tickets": [] }), "empty_request"),
        (json!({ "account_id": 1, "tickets": [{ "ticket_type": "ADULT", "count": -2 }] }), "non_positive_count"),
        (json!({ "account_id": 1, "tickets": [{ "ticket_type": "SENIOR", "count": 1 }] }), "unknown_ticket_type"),
        (json!({ "account_id": 1, "tickets": [{ "ticket_type": "ADULT", "count": 26 }] }), "too_many_tickets"),
        (json!({ "account_id": 1, "tickets": [{ "ticket_type": "CHILD", "count": 1 }] }), "missing_adult"),
        (
            json!({ "account_id": 1, "tickets": [
                { "ticket_type": "ADULT", "count": 1 },
                { "ticket_type": "INFANT", "count": 2 }
            ] }),
            "too_many_infants",
        ),
    ];

    for (body, kind) in cases {
        let fixture = TestFixture::new();
        let response = fixture.post("/api/v1/purchases", body).await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{}", kind);
        assert_eq!(response.body["kind"], kind);
        assert!(response.body["error"].is_string());
        assert_eq!(fixture.payment.charge_count().await, 0);
        assert_eq!(fixture.seats.reservation_count().await, 0);
    }
}

#[tokio::test]
async fn test_purchase_rejections_are_counted() {
    let cases = [
        (json!({ "account_id": 0, "tickets": [{ "ticket_type": "ADULT", "count": 1 }] }), "invalid_account"),
        (json!({ "account_id": 1, "tickets": [] }), "empty_request"),
        (json!({ "account_id": 1, "tickets": [{ "ticket_type": "ADULT", "count": 0 }] }), "non_positive_count"),
        (json!({ "account_id": 1, "tickets": [{ "ticket_type": "SENIOR", "count": 1 }] }), "unknown_ticket_type"),
        (json!({ "account_id": 1, "tickets": [{ "ticket_type": "INFANT", "count": 1 }] }), "missing_adult"),
    ];

    let fixture = TestFixture::new();
    for (body, kind) in cases {
        let counter = PURCHASES_TOTAL.with_label_values(&[kind]);
        let before = counter.get();

        let response = fixture.post("/api/v1/purchases", body).await;

        assert_eq!(response.body["kind"], kind);
        // Other tests share the global counter, so only require an increase.
        assert!(counter.get() > before, "{} was not counted", kind);
    }

    let metrics = fixture.get("/metrics").await.text;
    assert!(metrics.contains(r#"cinema_purchases_total{result="unknown_ticket_type"}"#));
    assert!(metrics.contains(r#"cinema_purchases_total{result="invalid_account"}"#));
}

#[tokio::test]
async fn test_purchase_type_not_on_sale() {
    let fixture = TestFixture::with_catalogue(CatalogueConfig::default().without(TicketType::Child));

    let response = fixture
        .post(
            "/api/v1/purchases",
            json!({
                "account_id": 3,
                "tickets": [
                    { "ticket_type": "ADULT", "count": 1 },
                    { "ticket_type": "CHILD", "count": 1 }
                ]
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["kind"], "unknown_ticket_type");
}

#[tokio::test]
async fn test_purchase_payment_failure() {
    let fixture = TestFixture::new();
    fixture
        .payment
        .set_next_error(PaymentError::Declined {
            reason: "insufficient funds".to_string(),
        })
        .await;

    let response = fixture
        .post(
            "/api/v1/purchases",
            json!({
                "account_id": 1,
                "tickets": [{ "ticket_type": "ADULT", "count": 1 }]
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["kind"], "payment_failed");
    assert_eq!(fixture.seats.reservation_count().await, 0);
}

#[tokio::test]
async fn test_purchase_malformed_body() {
    let fixture = TestFixture::new();

    let response = fixture.post_raw("/api/v1/purchases", "{not json").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = fixture
        .post("/api/v1/purchases", json!({ "tickets": [] }))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(fixture.payment.charge_count().await, 0);
}
