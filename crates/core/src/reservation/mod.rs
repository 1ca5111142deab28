//! Seat reservation collaborator.
//!
//! After a successful charge the purchase workflow reserves seats through the
//! `SeatAllocator` trait. `SeatReservationService` is the default adapter.

mod error;
mod seat_reservation;
mod traits;

pub use error::ReservationError;
pub use seat_reservation::SeatReservationService;
pub use traits::SeatAllocator;
