//! Common test utilities for API testing with mock collaborators.
//!
//! This module provides a test fixture that builds the router in-process
//! with mock payment and seat allocation injected.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cinema_tickets_core::{
    testing::{MockPaymentProcessor, MockSeatAllocator},
    Catalogue, CatalogueConfig, Config, TicketService,
};
use cinema_tickets_server::{api::create_router, state::AppState};

/// Test fixture with an in-process router and controllable mocks.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_purchase() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.post("/api/v1/purchases", json!({
///         "account_id": 1,
///         "tickets": [{ "ticket_type": "ADULT", "count": 1 }]
///     })).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock payment processor - inspect charges, inject failures
    pub payment: MockPaymentProcessor,
    /// Mock seat allocator - inspect reservations, inject failures
    pub seats: MockSeatAllocator,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture over the reference catalogue.
    pub fn new() -> Self {
        Self::with_catalogue(CatalogueConfig::default())
    }

    /// Create a test fixture with a custom catalogue.
    pub fn with_catalogue(catalogue_config: CatalogueConfig) -> Self {
        let payment = MockPaymentProcessor::new();
        let seats = MockSeatAllocator::new();

        let config = Config {
            catalogue: catalogue_config.clone(),
            ..Config::default()
        };
        let catalogue = Catalogue::new(catalogue_config).expect("Invalid test catalogue");

        let service = Arc::new(TicketService::new(
            Arc::new(catalogue),
            Arc::new(payment.clone()),
            Arc::new(seats.clone()),
        ));
        let state = Arc::new(AppState::new(config, service));

        Self {
            router: create_router(state),
            payment,
            seats,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}
