//! Error types for the reservation module.

use thiserror::Error;

/// Errors reported by a seat allocator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReservationError {
    /// The allocator does not recognise the account.
    #[error("Reservation rejected for account {account_id}")]
    InvalidAccount { account_id: i64 },

    /// Not enough seats left for the screening.
    #[error("Not enough seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: u64, available: u64 },

    /// The reservation backend could not be reached.
    #[error("Reservation service unavailable: {0}")]
    Unavailable(String),
}
