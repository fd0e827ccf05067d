//! Sequential bundle upload with prefix-aware key construction.

use printworks_core::result::AppResult;
use printworks_core::traits::storage::ObjectStore;
use printworks_core::types::upload::UploadFile;

/// Join an upload prefix and a file key.
///
/// Trailing slashes on the prefix are stripped so keys never carry a
/// doubled separator; an empty prefix yields the bare file key.
pub fn join_key(prefix: &str, key: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}/{key}")
    }
}

/// Upload a batch of files under one prefix, strictly in list order.
///
/// The first failed upload aborts the remainder of the batch. Partial
/// bundles are not rolled back: bundle completeness is signaled only by
/// the success callback, never by listing the bucket.
pub async fn upload_bundle(
    store: &dyn ObjectStore,
    bucket: &str,
    prefix: &str,
    files: &[UploadFile],
) -> AppResult<()> {
    for file in files {
        let full_key = join_key(prefix, &file.key);
        store
            .put(bucket, &full_key, file.bytes.clone(), &file.content_type)
            .await?;
        tracing::info!(key = full_key, size_bytes = file.bytes.len(), "Uploaded");
    }
    Ok(())
}
