//! HTTP front end
//!
//! Serves the input form and accepts submissions either as an HTML form
//! post or as JSON.

mod handlers;
mod page;
mod types;

pub use handlers::create_router;

use crate::config::AppConfig;
use crate::llm::ClientFactory;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client_factory: Arc<dyn ClientFactory>,
    /// Cancelled on shutdown; running sessions stop at their next step
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        client_factory: Arc<dyn ClientFactory>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            config: Arc::new(config),
            client_factory,
            shutdown,
        }
    }
}
