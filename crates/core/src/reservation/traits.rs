//! Trait definitions for the reservation module.

use async_trait::async_trait;

use super::error::ReservationError;

/// Reserves seats for an account.
#[async_trait]
pub trait SeatAllocator: Send + Sync {
    /// Returns the name of this allocator implementation.
    fn name(&self) -> &str;

    /// Reserves `seats` seats for `account_id`.
    async fn reserve(&self, account_id: i64, seats: u64) -> Result<(), ReservationError>;
}
