//! Pure validation and pricing steps of the purchase workflow.
//!
//! Each step takes immutable inputs and either returns a value or the first
//! violated rule. `evaluate` chains them in workflow order.

use crate::catalogue::{Catalogue, EscortRole, TicketType};

use super::error::PurchaseError;
use super::types::{AggregatedCounts, PurchaseOutcome, TicketLine, TicketTypeRequest};

/// Account ids must be strictly positive.
pub fn validate_account(account_id: i64) -> Result<(), PurchaseError> {
    if account_id <= 0 {
        return Err(PurchaseError::InvalidAccount { account_id });
    }
    Ok(())
}

/// A request must contain at least one line.
pub fn validate_requests<T>(requests: &[T]) -> Result<(), PurchaseError> {
    if requests.is_empty() {
        return Err(PurchaseError::EmptyRequest);
    }
    Ok(())
}

fn check_count(count: i64) -> Result<u64, PurchaseError> {
    if count <= 0 {
        return Err(PurchaseError::NonPositiveCount { count });
    }
    Ok(count as u64)
}

/// Converts untyped lines into typed requests.
///
/// Account and emptiness checks come first and each line's count is checked
/// before its type, so the error matches the one the typed workflow reports.
pub fn parse_lines(
    account_id: i64,
    lines: &[TicketLine],
) -> Result<Vec<TicketTypeRequest>, PurchaseError> {
    validate_account(account_id)?;
    validate_requests(lines)?;

    lines
        .iter()
        .map(|line| {
            check_count(line.count)?;
            let ticket_type = line.ticket_type.parse::<TicketType>()?;
            Ok(TicketTypeRequest::new(ticket_type, line.count))
        })
        .collect()
}

/// Sums request lines per ticket type.
///
/// Lines are checked in order; the first with a non-positive count or a type
/// missing from the catalogue fails the whole request.
pub fn aggregate(
    catalogue: &Catalogue,
    requests: &[TicketTypeRequest],
) -> Result<AggregatedCounts, PurchaseError> {
    let mut counts = AggregatedCounts::for_catalogue(catalogue);

    for request in requests {
        let count = check_count(request.count)?;
        if !catalogue.contains(request.ticket_type) {
            return Err(PurchaseError::UnknownTicketType {
                ticket_type: request.ticket_type.to_string(),
            });
        }
        counts.add(request.ticket_type, count);
    }

    Ok(counts)
}

/// Applies the ticket limit and accompaniment rules.
pub fn enforce_rules(catalogue: &Catalogue, counts: &AggregatedCounts) -> Result<(), PurchaseError> {
    let total = counts.total();
    if total > u64::from(catalogue.max_tickets()) {
        return Err(PurchaseError::TooManyTickets {
            requested: total,
            max: catalogue.max_tickets(),
        });
    }

    let mut escorts = 0u64;
    let mut accompanied = 0u64;
    let mut paired = 0u64;
    for def in catalogue.definitions() {
        let count = counts.get(def.ticket_type);
        match def.role {
            EscortRole::Escort => escorts = escorts.saturating_add(count),
            EscortRole::Accompanied => accompanied = accompanied.saturating_add(count),
        }
        if def.requires_escort_pairing() {
            paired = paired.saturating_add(count);
        }
    }

    if accompanied > 0 && escorts == 0 {
        return Err(PurchaseError::MissingAdult);
    }

    if paired > escorts {
        return Err(PurchaseError::TooManyInfants {
            infants: paired,
            adults: escorts,
        });
    }

    Ok(())
}

/// Total price of the tickets.
pub fn calculate_amount(catalogue: &Catalogue, counts: &AggregatedCounts) -> u64 {
    catalogue.definitions().iter().fold(0u64, |acc, def| {
        acc.saturating_add(counts.get(def.ticket_type).saturating_mul(u64::from(def.price)))
    })
}

/// Number of seats the tickets occupy.
pub fn calculate_seats(catalogue: &Catalogue, counts: &AggregatedCounts) -> u64 {
    catalogue
        .definitions()
        .iter()
        .filter(|def| def.requires_seat)
        .fold(0u64, |acc, def| acc.saturating_add(counts.get(def.ticket_type)))
}

/// Runs every validation step and prices the request, without side effects.
pub fn evaluate(
    catalogue: &Catalogue,
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> Result<PurchaseOutcome, PurchaseError> {
    validate_account(account_id)?;
    validate_requests(requests)?;
    let counts = aggregate(catalogue, requests)?;
    enforce_rules(catalogue, &counts)?;

    Ok(PurchaseOutcome {
        total_amount: calculate_amount(catalogue, &counts),
        total_seats: calculate_seats(catalogue, &counts),
    })
}
