//! Ticket type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of ticket types sold at the box office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names no ticket type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown ticket type: {0}")]
pub struct ParseTicketTypeError(pub String);

impl FromStr for TicketType {
    type Err = ParseTicketTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(ParseTicketTypeError(s.to_string())),
        }
    }
}

/// How a ticket type takes part in the accompaniment rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EscortRole {
    /// Can accompany other tickets (adults).
    Escort,
    /// Needs at least one escort in the same purchase.
    Accompanied,
}

/// Price and seating rules for a single ticket type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeDefinition {
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    /// Price in whole currency units.
    pub price: u32,
    pub requires_seat: bool,
    pub role: EscortRole,
}

impl TicketTypeDefinition {
    pub fn new(ticket_type: TicketType, price: u32, requires_seat: bool, role: EscortRole) -> Self {
        Self {
            ticket_type,
            price,
            requires_seat,
            role,
        }
    }

    /// True for types that sit on an escort's lap and must be paired 1:1.
    pub fn requires_escort_pairing(&self) -> bool {
        !self.requires_seat
    }
}
