use std::sync::Arc;
use cinema_tickets_core::{Catalogue, Config, TicketService};

/// Shared application state
pub struct AppState {
    config: Config,
    service: Arc<TicketService>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<TicketService>) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &TicketService {
        self.service.as_ref()
    }

    pub fn catalogue(&self) -> &Catalogue {
        self.service.catalogue()
    }
}
