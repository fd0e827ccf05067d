//! Cloudflare R2 object store built on the S3 SDK.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use printworks_core::config::storage::StorageConfig;
use printworks_core::error::{AppError, ErrorKind};
use printworks_core::result::AppResult;
use printworks_core::traits::storage::ObjectStore;

/// R2 storage backed by the S3-compatible API.
#[derive(Debug, Clone)]
pub struct R2Store {
    client: aws_sdk_s3::Client,
}

impl R2Store {
    /// Create a store from configuration. Credentials are static; the
    /// endpoint defaults to the account's R2 endpoint.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let endpoint = config.effective_endpoint();
        tracing::info!(endpoint, bucket = config.bucket, "Initializing R2 store");

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .endpoint_url(&endpoint)
            .credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "printworks",
            ))
            .load()
            .await;

        Ok(Self {
            client: aws_sdk_s3::Client::new(&shared),
        })
    }
}

#[async_trait]
impl ObjectStore for R2Store {
    fn provider_type(&self) -> &str {
        "r2"
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Upload,
                    format!("Failed to upload '{key}': {}", DisplayErrorContext(&e)),
                    e,
                )
            })?;

        Ok(())
    }
}
