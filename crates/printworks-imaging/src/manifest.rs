//! Bundle manifest construction.

use chrono::Utc;

use printworks_core::types::derivative::ImageOutput;
use printworks_core::types::manifest::{Manifest, ManifestEntry};

/// Build the bundle manifest for a derivative set.
///
/// Entries follow the output order exactly and record the encoded byte
/// length of each derivative.
pub fn build_manifest(outputs: &[ImageOutput]) -> Manifest {
    Manifest {
        generated_at: Utc::now().to_rfc3339(),
        files: outputs
            .iter()
            .map(|output| ManifestEntry {
                file: output.name.clone(),
                width: output.width,
                height: output.height,
                size: output.size_bytes(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn output(name: &str, width: u32, height: u32, len: usize) -> ImageOutput {
        ImageOutput {
            name: name.to_string(),
            width,
            height,
            bytes: Bytes::from(vec![0u8; len]),
        }
    }

    #[test]
    fn test_entries_preserve_order_and_sizes() {
        let outputs = vec![
            output("print/shirt.png", 4500, 5400, 10),
            output("print/sticker.png", 2800, 2800, 20),
            output("print/hat.png", 2400, 2400, 30),
        ];

        let manifest = build_manifest(&outputs);

        assert_eq!(manifest.files.len(), 3);
        for (entry, output) in manifest.files.iter().zip(&outputs) {
            assert_eq!(entry.file, output.name);
            assert_eq!(entry.width, output.width);
            assert_eq!(entry.height, output.height);
            assert_eq!(entry.size, output.size_bytes());
        }
    }

    #[test]
    fn test_generated_at_is_rfc3339() {
        let manifest = build_manifest(&[]);
        assert!(chrono::DateTime::parse_from_rfc3339(&manifest.generated_at).is_ok());
    }
}
