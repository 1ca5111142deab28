//! Error types for the purchase workflow.

use thiserror::Error;

use crate::catalogue::ParseTicketTypeError;
use crate::payment::PaymentError;
use crate::reservation::ReservationError;

/// Reasons a purchase can fail.
///
/// The first seven variants are rejections of the caller's input and are
/// raised before any collaborator is called. `Payment` and `Reservation`
/// carry collaborator failures unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Invalid account id: {account_id}")]
    InvalidAccount { account_id: i64 },

    #[error("No tickets requested")]
    EmptyRequest,

    #[error("Ticket count must be greater than zero, got {count}")]
    NonPositiveCount { count: i64 },

    #[error("Unknown ticket type: {ticket_type}")]
    UnknownTicketType { ticket_type: String },

    #[error("Cannot purchase more than {max} tickets, requested {requested}")]
    TooManyTickets { requested: u64, max: u32 },

    #[error("Child and Infant tickets require at least one Adult ticket")]
    MissingAdult,

    #[error("Each Infant must be accompanied by one Adult: {infants} infants, {adults} adults")]
    TooManyInfants { infants: u64, adults: u64 },

    #[error("Payment failed: {0}")]
    Payment(#[from] PaymentError),

    #[error("Seat reservation failed: {0}")]
    Reservation(#[from] ReservationError),
}

impl From<ParseTicketTypeError> for PurchaseError {
    fn from(err: ParseTicketTypeError) -> Self {
        Self::UnknownTicketType {
            ticket_type: err.0,
        }
    }
}

impl PurchaseError {
    /// Whether the purchase was rejected on validation, as opposed to a
    /// collaborator failing.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Payment(_) | Self::Reservation(_))
    }

    /// Stable label for this error, used in metrics and API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAccount { .. } => "invalid_account",
            Self::EmptyRequest => "empty_request",
            Self::NonPositiveCount { .. } => "non_positive_count",
            Self::UnknownTicketType { .. } => "unknown_ticket_type",
            Self::TooManyTickets { .. } => "too_many_tickets",
            Self::MissingAdult => "missing_adult",
            Self::TooManyInfants { .. } => "too_many_infants",
            Self::Payment(_) => "payment_failed",
            Self::Reservation(_) => "reservation_failed",
        }
    }
}
