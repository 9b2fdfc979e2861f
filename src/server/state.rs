//! Application State
//!
//! Shared state accessible by all front-end handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use super::error::ServerResult;
use crate::config::{Config, ServerConfig};
use crate::fetch::ResourceClient;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the fitness REST API
    pub client: ResourceClient,
    /// Front-end server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(client: ResourceClient, config: ServerConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Build the API client and state from a loaded [`Config`]
    pub fn from_config(config: &Config) -> ServerResult<Self> {
        let client = ResourceClient::new(config.api.client_config())?;
        Ok(Self::new(client, config.server.clone()))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
