//! Mock seat allocator for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::reservation::{ReservationError, SeatAllocator};

use super::next_sequence;

/// A recorded reservation for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedReservation {
    pub account_id: i64,
    pub seats: u64,
    /// Whether the reservation succeeded.
    pub success: bool,
    /// Position among all mock collaborator calls, for ordering checks.
    pub sequence: u64,
}

/// Mock implementation of the SeatAllocator trait.
#[derive(Debug, Clone, Default)]
pub struct MockSeatAllocator {
    /// Recorded reservations.
    reservations: Arc<RwLock<Vec<RecordedReservation>>>,
    /// If set, the next reservation will fail with this error.
    next_error: Arc<RwLock<Option<ReservationError>>>,
}

impl MockSeatAllocator {
    /// Create a new mock seat allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded reservations.
    pub async fn recorded_reservations(&self) -> Vec<RecordedReservation> {
        self.reservations.read().await.clone()
    }

    /// Get the number of reservations attempted.
    pub async fn reservation_count(&self) -> usize {
        self.reservations.read().await.len()
    }

    /// Configure the next reservation to fail with the given error.
    pub async fn set_next_error(&self, error: ReservationError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<ReservationError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl SeatAllocator for MockSeatAllocator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn reserve(&self, account_id: i64, seats: u64) -> Result<(), ReservationError> {
        let error = self.take_error().await;
        self.reservations.write().await.push(RecordedReservation {
            account_id,
            seats,
            success: error.is_none(),
            sequence: next_sequence(),
        });

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
