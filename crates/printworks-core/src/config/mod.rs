//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, overlaid with `PRINTWORKS__`-prefixed environment
//! variables. Each sub-module represents a logical configuration section.

pub mod imagen;
pub mod logging;
pub mod queue;
pub mod storage;
pub mod worker;

use serde::{Deserialize, Serialize};

use self::imagen::ImagenConfig;
use self::logging::LoggingConfig;
use self::queue::QueueConfig;
use self::storage::StorageConfig;
use self::worker::WorkerConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
/// Every section is optional at parse time; [`AppConfig::validate`]
/// reports missing required values before the run starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Core job-queue service settings.
    #[serde(default)]
    pub queue: QueueConfig,
    /// Object storage (R2/S3) settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Generative image API settings.
    #[serde(default)]
    pub imagen: ImagenConfig,
    /// Worker run settings.
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `PRINTWORKS`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PRINTWORKS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check that every value the run cannot proceed without is present.
    ///
    /// Reports all missing fields in one message so a misconfigured
    /// deployment is fixed in one round trip.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();

        if self.queue.base_url.is_empty() {
            missing.push("queue.base_url");
        }
        if self.queue.worker_token.is_empty() {
            missing.push("queue.worker_token");
        }
        if self.storage.account_id.is_empty() {
            missing.push("storage.account_id");
        }
        if self.storage.access_key.is_empty() {
            missing.push("storage.access_key");
        }
        if self.storage.secret_key.is_empty() {
            missing.push("storage.secret_key");
        }
        if self.storage.bucket.is_empty() {
            missing.push("storage.bucket");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::configuration(format!(
                "Missing required configuration: {}",
                missing.join(", ")
            )))
        }
    }
}
