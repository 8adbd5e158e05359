//! Core types and errors for iconmeta

pub mod error;
pub mod types;

pub use error::MetadataError;
pub use types::{BitDepth, ImageMetadata};
