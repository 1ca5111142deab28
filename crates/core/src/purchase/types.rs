//! Request and outcome types for the purchase workflow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalogue::{Catalogue, TicketType};

/// A single line of a purchase request: `count` tickets of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    pub ticket_type: TicketType,
    pub count: i64,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: i64) -> Self {
        Self { ticket_type, count }
    }
}

/// An untyped request line, as received from a client.
///
/// The type stays a string so a name outside the closed set is reported as an
/// unknown ticket type by the purchase workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLine {
    pub ticket_type: String,
    pub count: i64,
}

impl TicketLine {
    pub fn new(ticket_type: impl Into<String>, count: i64) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            count,
        }
    }
}

/// Ticket counts per type, with an entry for every catalogue type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregatedCounts {
    counts: BTreeMap<TicketType, u64>,
}

impl AggregatedCounts {
    /// Zero counts for every type in the catalogue.
    pub fn for_catalogue(catalogue: &Catalogue) -> Self {
        Self {
            counts: catalogue
                .definitions()
                .iter()
                .map(|d| (d.ticket_type, 0))
                .collect(),
        }
    }

    /// Count for a ticket type; zero for types not on sale.
    pub fn get(&self, ticket_type: TicketType) -> u64 {
        self.counts.get(&ticket_type).copied().unwrap_or(0)
    }

    /// Adds tickets of a type already present in the map.
    pub(crate) fn add(&mut self, ticket_type: TicketType, count: u64) {
        if let Some(c) = self.counts.get_mut(&ticket_type) {
            *c = c.saturating_add(count);
        }
    }

    /// Total tickets across all types.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TicketType, u64)> + '_ {
        self.counts.iter().map(|(t, c)| (*t, *c))
    }
}

/// Amount charged and seats reserved for a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub total_amount: u64,
    pub total_seats: u64,
}
