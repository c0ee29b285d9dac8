//! Response DTOs.

use serde::Serialize;

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Overall status, `ok` when the store is reachable.
    pub status: String,
    /// Server version.
    pub version: String,
}
