//! Ticket catalogue.
//!
//! The catalogue is the fixed, ordered table of ticket types on sale together
//! with their price, seating requirement and escort role. It is built once
//! from configuration and shared read-only by every purchase.
//!
//! # Example
//!
//! ```ignore
//! use cinema_tickets_core::catalogue::{Catalogue, TicketType};
//!
//! let catalogue = Catalogue::reference();
//! let adult = catalogue.get(TicketType::Adult).unwrap();
//! assert_eq!(adult.price, 25);
//! ```

mod config;
mod types;

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

pub use config::CatalogueConfig;
pub use types::{EscortRole, ParseTicketTypeError, TicketType, TicketTypeDefinition};

/// Errors raised while building a catalogue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Catalogue has no ticket types")]
    Empty,

    #[error("Maximum ticket count must be greater than zero")]
    ZeroMaxTickets,

    #[error("Ticket type {0} is defined more than once")]
    DuplicateTicketType(TicketType),

    #[error("Ticket type {0} does not require a seat and must be accompanied")]
    UnseatedEscort(TicketType),

    #[error("Ticket type {0} must be accompanied but no escort type is defined")]
    NoEscortType(TicketType),
}

/// Read-only table of ticket type definitions.
#[derive(Debug, Clone, Serialize)]
pub struct Catalogue {
    max_tickets: u32,
    ticket_types: Vec<TicketTypeDefinition>,
}

impl Catalogue {
    /// Builds a catalogue, checking that the definitions are consistent.
    pub fn new(config: CatalogueConfig) -> Result<Self, CatalogueError> {
        if config.max_tickets == 0 {
            return Err(CatalogueError::ZeroMaxTickets);
        }
        if config.ticket_types.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let mut seen = HashSet::new();
        for def in &config.ticket_types {
            if !seen.insert(def.ticket_type) {
                return Err(CatalogueError::DuplicateTicketType(def.ticket_type));
            }
            if def.requires_escort_pairing() && def.role == EscortRole::Escort {
                return Err(CatalogueError::UnseatedEscort(def.ticket_type));
            }
        }

        let has_escort = config
            .ticket_types
            .iter()
            .any(|d| d.role == EscortRole::Escort);
        if !has_escort {
            if let Some(def) = config
                .ticket_types
                .iter()
                .find(|d| d.role == EscortRole::Accompanied)
            {
                return Err(CatalogueError::NoEscortType(def.ticket_type));
            }
        }

        Ok(Self {
            max_tickets: config.max_tickets,
            ticket_types: config.ticket_types,
        })
    }

    /// The standard ADULT / CHILD / INFANT catalogue with a limit of 25.
    pub fn reference() -> Self {
        Self {
            max_tickets: CatalogueConfig::default().max_tickets,
            ticket_types: CatalogueConfig::default().ticket_types,
        }
    }

    pub fn max_tickets(&self) -> u32 {
        self.max_tickets
    }

    /// Definitions in catalogue order.
    pub fn definitions(&self) -> &[TicketTypeDefinition] {
        &self.ticket_types
    }

    /// Looks up the definition for a ticket type, if it is on sale.
    pub fn get(&self, ticket_type: TicketType) -> Option<&TicketTypeDefinition> {
        self.ticket_types
            .iter()
            .find(|d| d.ticket_type == ticket_type)
    }

    pub fn contains(&self, ticket_type: TicketType) -> bool {
        self.get(ticket_type).is_some()
    }
}
