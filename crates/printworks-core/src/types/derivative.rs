//! The fixed derivative table and the per-derivative output type.

use bytes::Bytes;

/// One target derivative: logical name plus exact output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivativeSpec {
    /// Output file name, relative to the job's upload prefix.
    pub name: &'static str,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
}

/// The print derivatives every image-process job produces, in upload
/// and manifest order. Not configurable.
pub const DERIVATIVE_SPECS: [DerivativeSpec; 3] = [
    DerivativeSpec {
        name: "print/shirt.png",
        width: 4500,
        height: 5400,
    },
    DerivativeSpec {
        name: "print/sticker.png",
        width: 2800,
        height: 2800,
    },
    DerivativeSpec {
        name: "print/hat.png",
        width: 2400,
        height: 2400,
    },
];

/// One generated derivative image.
#[derive(Debug, Clone)]
pub struct ImageOutput {
    /// Logical file name from the derivative table.
    pub name: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Encoded PNG bytes.
    pub bytes: Bytes,
}

impl ImageOutput {
    /// Encoded size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}
