//! # printworks-imaging
//!
//! Derivative generation for image-process jobs: trim the transparent
//! border from a source design, render each fixed print derivative with
//! a contain fit on a transparent canvas, encode as PNG, and build the
//! bundle manifest.

pub mod error;
pub mod manifest;
pub mod transform;

pub use error::TransformError;
pub use manifest::build_manifest;
pub use transform::transform;
