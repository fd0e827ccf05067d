//! Worker run configuration.

use serde::{Deserialize, Serialize};

/// Settings for one worker run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Maximum number of jobs requested per job type.
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    /// Deadline in seconds applied to every outbound HTTP request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

fn default_batch_size() -> u32 {
    2
}

fn default_http_timeout() -> u64 {
    60
}
