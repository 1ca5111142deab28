//! Configuration for the ticket catalogue.

use serde::{Deserialize, Serialize};

use super::types::{EscortRole, TicketType, TicketTypeDefinition};

/// Ticket types on sale and the per-purchase ticket limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogueConfig {
    /// Maximum number of tickets in a single purchase.
    #[serde(default = "default_max_tickets")]
    pub max_tickets: u32,

    /// Ticket type definitions, in display order.
    #[serde(default = "default_ticket_types")]
    pub ticket_types: Vec<TicketTypeDefinition>,
}

fn default_max_tickets() -> u32 {
    25
}

fn default_ticket_types() -> Vec<TicketTypeDefinition> {
    vec![
        TicketTypeDefinition::new(TicketType::Adult, 25, true, EscortRole::Escort),
        TicketTypeDefinition::new(TicketType::Child, 15, true, EscortRole::Accompanied),
        TicketTypeDefinition::new(TicketType::Infant, 0, false, EscortRole::Accompanied),
    ]
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            max_tickets: default_max_tickets(),
            ticket_types: default_ticket_types(),
        }
    }
}

impl CatalogueConfig {
    /// Sets the per-purchase ticket limit.
    pub fn with_max_tickets(mut self, max_tickets: u32) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    /// Replaces the ticket type definitions.
    pub fn with_ticket_types(mut self, ticket_types: Vec<TicketTypeDefinition>) -> Self {
        self.ticket_types = ticket_types;
        self
    }

    /// Drops a ticket type from sale.
    pub fn without(mut self, ticket_type: TicketType) -> Self {
        self.ticket_types.retain(|d| d.ticket_type != ticket_type);
        self
    }
}
