//! Default payment adapter.

use async_trait::async_trait;
use tracing::info;

use super::error::PaymentError;
use super::traits::PaymentProcessor;

/// Payment adapter for the box office's external payment provider.
///
/// The provider takes the charge without reporting back, so the adapter only
/// checks its arguments and records the charge.
#[derive(Debug, Default, Clone)]
pub struct TicketPaymentService;

impl TicketPaymentService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for TicketPaymentService {
    fn name(&self) -> &str {
        "ticket_payment_service"
    }

    async fn charge(&self, account_id: i64, amount: u64) -> Result<(), PaymentError> {
        if account_id <= 0 {
            return Err(PaymentError::InvalidAccount { account_id });
        }

        info!(account_id, amount, "Payment taken");
        Ok(())
    }
}
