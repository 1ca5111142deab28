//! Mock payment processor for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::payment::{PaymentError, PaymentProcessor};

use super::next_sequence;

/// A recorded charge for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCharge {
    pub account_id: i64,
    pub amount: u64,
    /// Whether the charge succeeded.
    pub success: bool,
    /// Position among all mock collaborator calls, for ordering checks.
    pub sequence: u64,
}

/// Mock implementation of the PaymentProcessor trait.
///
/// Records every charge and can be told to fail the next one.
///
/// # Example
///
/// ```rust,ignore
/// use cinema_tickets_core::testing::MockPaymentProcessor;
///
/// let payment = MockPaymentProcessor::new();
/// let service = TicketService::new(catalogue, Arc::new(payment.clone()), seats);
///
/// service.purchase_tickets(1, &requests).await?;
///
/// let charges = payment.recorded_charges().await;
/// assert_eq!(charges[0].amount, 65);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPaymentProcessor {
    /// Recorded charges.
    charges: Arc<RwLock<Vec<RecordedCharge>>>,
    /// If set, the next charge will fail with this error.
    next_error: Arc<RwLock<Option<PaymentError>>>,
}

impl MockPaymentProcessor {
    /// Create a new mock payment processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded charges.
    pub async fn recorded_charges(&self) -> Vec<RecordedCharge> {
        self.charges.read().await.clone()
    }

    /// Get the number of charges attempted.
    pub async fn charge_count(&self) -> usize {
        self.charges.read().await.len()
    }

    /// Clear recorded charges.
    pub async fn clear_recorded_charges(&self) {
        self.charges.write().await.clear();
    }

    /// Configure the next charge to fail with the given error.
    pub async fn set_next_error(&self, error: PaymentError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<PaymentError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl PaymentProcessor for MockPaymentProcessor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn charge(&self, account_id: i64, amount: u64) -> Result<(), PaymentError> {
        let error = self.take_error().await;
        self.charges.write().await.push(RecordedCharge {
            account_id,
            amount,
            success: error.is_none(),
            sequence: next_sequence(),
        });

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
