//! Transient upload batch entry.

use bytes::Bytes;

/// One file in an upload batch. Exists only for the duration of the batch.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Key relative to the batch's prefix.
    pub key: String,
    /// File contents.
    pub bytes: Bytes,
    /// MIME type set on the stored object.
    pub content_type: String,
}

impl UploadFile {
    /// Create an upload entry.
    pub fn new(key: impl Into<String>, bytes: Bytes, content_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            bytes,
            content_type: content_type.into(),
        }
    }
}
