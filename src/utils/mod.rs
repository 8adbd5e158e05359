//! Utility modules for iconmeta

pub mod image;
