use image::{ImageDecoder, ImageReader};
use std::path::Path;

use crate::core::{BitDepth, ImageMetadata, MetadataError};

/// Reads the header of an image file and returns its metadata.
///
/// The format is sniffed from the file's magic bytes, not its extension.
/// Only the header is decoded; pixel data is never read.
pub fn read_metadata(path: &Path) -> Result<ImageMetadata, MetadataError> {
    if path.as_os_str().is_empty() {
        return Err(MetadataError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| MetadataError::io(path.to_path_buf(), e))?;

    let format = reader
        .format()
        .ok_or_else(|| MetadataError::UnknownFormat {
            path: path.to_path_buf(),
        })?;

    let decoder = reader.into_decoder().map_err(|e| MetadataError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (width, height) = decoder.dimensions();
    let color = decoder.color_type();
    let channels = color.channel_count();
    let bits = color.bits_per_pixel() / u16::from(channels.max(1));

    Ok(ImageMetadata {
        width,
        height,
        format: format!("{:?}", format).to_ascii_lowercase(),
        depth: BitDepth::from_bits(bits),
        channels,
    })
}
