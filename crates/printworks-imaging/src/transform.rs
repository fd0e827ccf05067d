//! The derivative pipeline: trim, contain-fit resize, transparent pad,
//! PNG encode.

use std::io::Cursor;

use bytes::Bytes;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use printworks_core::types::derivative::{DERIVATIVE_SPECS, DerivativeSpec, ImageOutput};

use crate::error::TransformError;

/// Generate the full fixed derivative set from one source image.
///
/// The source may be any raster format the `image` crate decodes. The
/// output order always matches [`DERIVATIVE_SPECS`]. Deterministic for
/// identical input bytes.
pub fn transform(source: &[u8]) -> Result<Vec<ImageOutput>, TransformError> {
    let decoded = image::load_from_memory(source)
        .map_err(TransformError::Decode)?
        .to_rgba8();

    let trimmed = trim_transparent_border(&decoded).ok_or(TransformError::NothingVisible)?;

    tracing::debug!(
        source_width = decoded.width(),
        source_height = decoded.height(),
        trimmed_width = trimmed.width(),
        trimmed_height = trimmed.height(),
        "Trimmed source image"
    );

    DERIVATIVE_SPECS
        .iter()
        .map(|spec| render_derivative(&trimmed, spec))
        .collect()
}

/// Crop the image to the bounding box of its visible (alpha > 0) pixels.
///
/// Returns `None` when the image is fully transparent.
fn trim_transparent_border(image: &RgbaImage) -> Option<RgbaImage> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut any_visible = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] > 0 {
            any_visible = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !any_visible {
        return None;
    }

    let width = max_x - min_x + 1;
    let height = max_y - min_y + 1;
    Some(imageops::crop_imm(image, min_x, min_y, width, height).to_image())
}

/// Render one derivative: contain-fit the trimmed image inside the
/// target box, center it on a transparent canvas, and encode as PNG.
fn render_derivative(
    trimmed: &RgbaImage,
    spec: &DerivativeSpec,
) -> Result<ImageOutput, TransformError> {
    let (scaled_w, scaled_h) = contain_dimensions(
        trimmed.width(),
        trimmed.height(),
        spec.width,
        spec.height,
    );

    let resized = imageops::resize(trimmed, scaled_w, scaled_h, FilterType::Lanczos3);

    // Fully transparent canvas; any area not covered by the resized
    // image stays transparent.
    let mut canvas = RgbaImage::new(spec.width, spec.height);
    let offset_x = i64::from((spec.width - scaled_w) / 2);
    let offset_y = i64::from((spec.height - scaled_h) / 2);
    imageops::overlay(&mut canvas, &resized, offset_x, offset_y);

    let mut encoded = Cursor::new(Vec::new());
    canvas
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|source| TransformError::Encode {
            name: spec.name.to_string(),
            source,
        })?;

    Ok(ImageOutput {
        name: spec.name.to_string(),
        width: spec.width,
        height: spec.height,
        bytes: Bytes::from(encoded.into_inner()),
    })
}

/// Scale `(width, height)` to fit entirely inside `(box_w, box_h)`
/// preserving aspect ratio. Never returns a zero dimension and never
/// exceeds the box.
fn contain_dimensions(width: u32, height: u32, box_w: u32, box_h: u32) -> (u32, u32) {
    let scale = f64::min(
        f64::from(box_w) / f64::from(width),
        f64::from(box_h) / f64::from(height),
    );
    let scaled_w = ((f64::from(width) * scale).round() as u32).clamp(1, box_w);
    let scaled_h = ((f64::from(height) * scale).round() as u32).clamp(1, box_h);
    (scaled_w, scaled_h)
}
