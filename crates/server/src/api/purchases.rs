//! Purchase API handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use cinema_tickets_core::TicketLine;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for purchasing tickets
#[derive(Debug, Deserialize)]
pub struct PurchaseBody {
    pub account_id: i64,
    /// Ticket types are plain strings, so an unknown type is a purchase
    /// rejection rather than a malformed body.
    pub tickets: Vec<TicketLine>,
}

/// Response for a completed purchase
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub account_id: i64,
    pub total_amount: u64,
    pub total_seats: u64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct PurchaseErrorResponse {
    pub error: String,
    pub kind: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Purchase tickets for an account
pub async fn create_purchase(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PurchaseBody>,
) -> Result<Json<PurchaseResponse>, impl IntoResponse> {
    let result = state
        .service()
        .purchase_ticket_lines(body.account_id, &body.tickets)
        .await;

    match result {
        Ok(outcome) => Ok(Json(PurchaseResponse {
            account_id: body.account_id,
            total_amount: outcome.total_amount,
            total_seats: outcome.total_seats,
        })),
        Err(e) => {
            let status = if e.is_rejection() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::BAD_GATEWAY
            };
            Err((
                status,
                Json(PurchaseErrorResponse {
                    error: e.to_string(),
                    kind: e.kind().to_string(),
                }),
            ))
        }
    }
}
