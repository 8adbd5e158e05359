use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an image header
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("no such file: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized image format: {}", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("failed to decode header of {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl MetadataError {
    pub(crate) fn io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            MetadataError::NotFound { path }
        } else {
            MetadataError::Io { path, source }
        }
    }
}
