//! Error types for the payment module.

use thiserror::Error;

/// Errors reported by a payment processor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The processor does not recognise the account.
    #[error("Payment rejected for account {account_id}")]
    InvalidAccount { account_id: i64 },

    /// The charge was declined.
    #[error("Payment declined: {reason}")]
    Declined { reason: String },

    /// The payment backend could not be reached.
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
}
