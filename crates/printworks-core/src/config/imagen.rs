//! Generative image API configuration.

use serde::{Deserialize, Serialize};

/// Google Imagen API settings.
///
/// The API key is optional: when it is absent the AI_GENERATE job type
/// is skipped entirely for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagenConfig {
    /// Google AI Studio API key.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Default model identifier; a job may override it.
    #[serde(default = "default_model")]
    pub model: String,
    /// Endpoint base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ImagenConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_model() -> String {
    "imagen-3.0-generate-002".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
