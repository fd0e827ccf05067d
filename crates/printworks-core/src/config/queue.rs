//! Core job-queue service configuration.

use serde::{Deserialize, Serialize};

/// Settings for the core service that leases jobs and receives callbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Base URL of the core service (e.g. `https://core.example.com`).
    #[serde(default)]
    pub base_url: String,
    /// Worker authentication token, sent as `X-WORKER-TOKEN`.
    #[serde(default)]
    pub worker_token: String,
}
