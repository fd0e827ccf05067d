//! Handlers for the supported job types.

pub mod generate;
pub mod image_process;

pub use generate::GenerateJobHandler;
pub use image_process::ImageProcessHandler;
