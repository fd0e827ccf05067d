//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// R2/S3-compatible object storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Cloudflare account identifier; used to derive the R2 endpoint.
    #[serde(default)]
    pub account_id: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Bucket name all artifacts are written to.
    #[serde(default)]
    pub bucket: String,
    /// Explicit endpoint override (for MinIO or tests). When unset the
    /// endpoint is `https://{account_id}.r2.cloudflarestorage.com`.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl StorageConfig {
    /// Resolve the effective endpoint URL.
    pub fn effective_endpoint(&self) -> String {
        self.endpoint.clone().unwrap_or_else(|| {
            format!("https://{}.r2.cloudflarestorage.com", self.account_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_derived_from_account_id() {
        let config = StorageConfig {
            account_id: "abc123".to_string(),
            ..StorageConfig::default()
        };
        assert_eq!(
            config.effective_endpoint(),
            "https://abc123.r2.cloudflarestorage.com"
        );
    }

    #[test]
    fn test_endpoint_override_wins() {
        let config = StorageConfig {
            account_id: "abc123".to_string(),
            endpoint: Some("http://127.0.0.1:9000".to_string()),
            ..StorageConfig::default()
        };
        assert_eq!(config.effective_endpoint(), "http://127.0.0.1:9000");
    }
}
