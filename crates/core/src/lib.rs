pub mod catalogue;
pub mod config;
pub mod metrics;
pub mod payment;
pub mod purchase;
pub mod reservation;
pub mod testing;

pub use catalogue::{
    Catalogue, CatalogueConfig, CatalogueError, EscortRole, ParseTicketTypeError, TicketType,
    TicketTypeDefinition,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ServerConfig,
};
pub use payment::{PaymentError, PaymentProcessor, TicketPaymentService};
pub use purchase::{
    AggregatedCounts, PurchaseError, PurchaseOutcome, TicketLine, TicketService, TicketTypeRequest,
};
pub use reservation::{ReservationError, SeatAllocator, SeatReservationService};
