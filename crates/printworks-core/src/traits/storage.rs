//! Object storage trait for artifact uploads.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for object-storage backends.
///
/// Each `put` is a full overwrite of the key; re-uploading the same key
/// is safe. Implementations must be safe for concurrent independent
/// invocations with distinct keys.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g. "r2").
    fn provider_type(&self) -> &str;

    /// Write one object.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> AppResult<()>;
}
