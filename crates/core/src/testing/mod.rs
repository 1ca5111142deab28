//! Testing utilities and mock collaborators.
//!
//! The mocks record every call and support one-shot error injection, so the
//! purchase workflow can be exercised without real payment or booking
//! systems.
//!
//! # Example
//!
//! ```rust,ignore
//! use cinema_tickets_core::testing::{fixtures, MockPaymentProcessor, MockSeatAllocator};
//!
//! let payment = MockPaymentProcessor::new();
//! let seats = MockSeatAllocator::new();
//! let service = fixtures::ticket_service(&payment, &seats);
//! ```

mod mock_payment;
mod mock_reservation;

use std::sync::atomic::{AtomicU64, Ordering};

pub use mock_payment::{MockPaymentProcessor, RecordedCharge};
pub use mock_reservation::{MockSeatAllocator, RecordedReservation};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Monotonic counter shared by all mocks so tests can check call order.
fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::SeqCst)
}

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::sync::Arc;

    use super::{MockPaymentProcessor, MockSeatAllocator};
    use crate::catalogue::{Catalogue, TicketType};
    use crate::purchase::{TicketService, TicketTypeRequest};

    pub fn adults(count: i64) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Adult, count)
    }

    pub fn children(count: i64) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Child, count)
    }

    pub fn infants(count: i64) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Infant, count)
    }

    /// A ticket service over the reference catalogue wired to the given mocks.
    pub fn ticket_service(
        payment: &MockPaymentProcessor,
        seats: &MockSeatAllocator,
    ) -> TicketService {
        ticket_service_with(Catalogue::reference(), payment, seats)
    }

    /// A ticket service over a custom catalogue wired to the given mocks.
    pub fn ticket_service_with(
        catalogue: Catalogue,
        payment: &MockPaymentProcessor,
        seats: &MockSeatAllocator,
    ) -> TicketService {
        TicketService::new(
            Arc::new(catalogue),
            Arc::new(payment.clone()),
            Arc::new(seats.clone()),
        )
    }
}
