pub mod config;
pub mod core;
pub mod runner;
pub mod utils;

// Re-export key items for convenience
pub use config::{ReporterConfig, default_icon_path};
pub use crate::core::{BitDepth, ImageMetadata, MetadataError};
pub use runner::{run, run_with};
pub use utils::image::read_metadata;
