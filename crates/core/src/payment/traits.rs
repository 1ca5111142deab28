//! Trait definitions for the payment module.

use async_trait::async_trait;

use super::error::PaymentError;

/// Charges an account for a ticket purchase.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Returns the name of this processor implementation.
    fn name(&self) -> &str;

    /// Charges `amount` to `account_id`.
    async fn charge(&self, account_id: i64, amount: u64) -> Result<(), PaymentError>;
}
