//! Ticket purchase workflow.
//!
//! A purchase runs through a fixed, fail-fast sequence of checks before any
//! money moves:
//!
//! 1. The account id must be positive
//! 2. At least one request line must be given
//! 3. Every line must have a positive count and a type on sale
//! 4. The ticket limit and accompaniment rules must hold
//!
//! Untyped lines from a client go through the same checks via
//! [`TicketService::purchase_ticket_lines`], where a name outside the closed
//! set of ticket types fails step 3.
//!
//! The request is then priced, the account charged and seats reserved, in
//! that order. The individual steps are available as pure functions in
//! [`rules`].
//!
//! # Example
//!
//! ```ignore
//! use cinema_tickets_core::{Catalogue, TicketService, TicketType, TicketTypeRequest};
//!
//! let service = TicketService::new(catalogue, payment, seats);
//! let outcome = service
//!     .purchase_tickets(42, &[TicketTypeRequest::new(TicketType::Adult, 2)])
//!     .await?;
//! println!("Charged {} for {} seats", outcome.total_amount, outcome.total_seats);
//! ```

mod error;
pub mod rules;
mod service;
mod types;

pub use error::PurchaseError;
pub use service::TicketService;
pub use types::{AggregatedCounts, PurchaseOutcome, TicketLine, TicketTypeRequest};
