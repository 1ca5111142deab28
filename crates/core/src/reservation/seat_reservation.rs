//! Default seat reservation adapter.

use async_trait::async_trait;
use tracing::info;

use super::error::ReservationError;
use super::traits::SeatAllocator;

/// Reservation adapter for the cinema's external seat booking system.
#[derive(Debug, Default, Clone)]
pub struct SeatReservationService;

impl SeatReservationService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SeatAllocator for SeatReservationService {
    fn name(&self) -> &str {
        "seat_reservation_service"
    }

    async fn reserve(&self, account_id: i64, seats: u64) -> Result<(), ReservationError> {
        if account_id <= 0 {
            return Err(ReservationError::InvalidAccount { account_id });
        }

        info!(account_id, seats, "Seats reserved");
        Ok(())
    }
}
