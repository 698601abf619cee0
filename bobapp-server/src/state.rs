//! Server state
//!
//! Holds the injected joke provider; nothing in here is mutated after startup.

use std::sync::Arc;

use bobapp_core::JokeProvider;

/// Server-wide shared state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn JokeProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn JokeProvider>) -> Self {
        Self { provider }
    }
}
