//! Response types for the JSON endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::resource::Resource;

/// Normalized records for one collection
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub resource: Resource,
    pub count: usize,
    pub results: Value,
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Fitness API status: ok or error
    pub api: String,
    /// Base URL of the fitness API
    pub api_url: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
