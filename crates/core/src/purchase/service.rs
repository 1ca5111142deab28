//! Ticket purchase service.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::catalogue::Catalogue;
use crate::metrics::{
    COLLABORATOR_DURATION, PURCHASES_TOTAL, REVENUE_TOTAL, SEATS_RESERVED, TICKETS_SOLD,
};
use crate::payment::PaymentProcessor;
use crate::reservation::SeatAllocator;

use super::error::PurchaseError;
use super::rules;
use super::types::{PurchaseOutcome, TicketLine, TicketTypeRequest};

/// Validates, prices and settles ticket purchases.
///
/// Holds no mutable state; a single instance can serve concurrent purchases.
pub struct TicketService {
    catalogue: Arc<Catalogue>,
    payment: Arc<dyn PaymentProcessor>,
    seats: Arc<dyn SeatAllocator>,
}

impl TicketService {
    pub fn new(
        catalogue: Arc<Catalogue>,
        payment: Arc<dyn PaymentProcessor>,
        seats: Arc<dyn SeatAllocator>,
    ) -> Self {
        Self {
            catalogue,
            payment,
            seats,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Purchases tickets for an account.
    ///
    /// The request is rejected on the first failed check, before any
    /// collaborator is called. On success the account is charged and then
    /// seats are reserved; seats are never reserved if the charge fails.
    pub async fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let result = self.settle(account_id, requests).await;
        record(account_id, &result);
        result
    }

    /// Purchases tickets from untyped lines.
    ///
    /// Lines are parsed with [`rules::parse_lines`] and then settled as in
    /// [`purchase_tickets`](Self::purchase_tickets). Every outcome, including
    /// a rejection raised while parsing, is logged and counted.
    pub async fn purchase_ticket_lines(
        &self,
        account_id: i64,
        lines: &[TicketLine],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let result = match rules::parse_lines(account_id, lines) {
            Ok(requests) => self.settle(account_id, &requests).await,
            Err(e) => Err(e),
        };
        record(account_id, &result);
        result
    }

    async fn settle(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        rules::validate_account(account_id)?;
        rules::validate_requests(requests)?;
        let counts = rules::aggregate(&self.catalogue, requests)?;
        debug!(account_id, total = counts.total(), "Aggregated ticket request");
        rules::enforce_rules(&self.catalogue, &counts)?;

        let outcome = PurchaseOutcome {
            total_amount: rules::calculate_amount(&self.catalogue, &counts),
            total_seats: rules::calculate_seats(&self.catalogue, &counts),
        };

        let start = Instant::now();
        let charged = self.payment.charge(account_id, outcome.total_amount).await;
        observe("payment", start, charged.is_ok());
        charged?;

        let start = Instant::now();
        let reserved = self.seats.reserve(account_id, outcome.total_seats).await;
        observe("reservation", start, reserved.is_ok());
        reserved?;

        REVENUE_TOTAL.inc_by(outcome.total_amount);
        SEATS_RESERVED.inc_by(outcome.total_seats);
        for (ticket_type, count) in counts.iter().filter(|(_, c)| *c > 0) {
            TICKETS_SOLD
                .with_label_values(&[ticket_type.as_str()])
                .inc_by(count);
        }

        Ok(outcome)
    }
}

fn record(account_id: i64, result: &Result<PurchaseOutcome, PurchaseError>) {
    match result {
        Ok(outcome) => {
            PURCHASES_TOTAL.with_label_values(&["success"]).inc();
            info!(
                account_id,
                total_amount = outcome.total_amount,
                total_seats = outcome.total_seats,
                "Tickets purchased"
            );
        }
        Err(e) => {
            PURCHASES_TOTAL.with_label_values(&[e.kind()]).inc();
            warn!(account_id, kind = e.kind(), "Purchase failed: {}", e);
        }
    }
}

fn observe(collaborator: &str, start: Instant, ok: bool) {
    let result = if ok { "success" } else { "failed" };
    COLLABORATOR_DURATION
        .with_label_values(&[collaborator, result])
        .observe(start.elapsed().as_secs_f64());
}
