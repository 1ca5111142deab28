//! Payment collaborator.
//!
//! The purchase workflow charges the account through the `PaymentProcessor`
//! trait once a request has passed validation. `TicketPaymentService` is the
//! default adapter wired in production.

mod error;
mod ticket_payment;
mod traits;

pub use error::PaymentError;
pub use ticket_payment::TicketPaymentService;
pub use traits::PaymentProcessor;
