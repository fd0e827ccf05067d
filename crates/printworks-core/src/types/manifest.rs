//! Bundle manifest uploaded alongside the derivatives.

use serde::{Deserialize, Serialize};

/// One manifest row: a derivative's name, dimensions, and encoded size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name relative to the bundle prefix.
    pub file: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded size in bytes.
    pub size: u64,
}

/// The bundle manifest. Entries are in derivative-spec order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// RFC 3339 UTC timestamp of manifest generation.
    pub generated_at: String,
    /// One entry per derivative, in upload order.
    pub files: Vec<ManifestEntry>,
}
