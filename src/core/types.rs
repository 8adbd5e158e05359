//! Core types shared across iconmeta modules

use std::fmt;

/// Per-channel sample format of a decoded image header.
///
/// Named after the vocabulary common image tools use for sample types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// 8-bit unsigned samples
    UChar,
    /// 16-bit unsigned samples
    UShort,
    /// 32-bit floating point samples
    Float,
    /// Any other sample width, in bits
    Other(u16),
}

impl BitDepth {
    /// Maps a per-channel bit width to its sample format.
    pub fn from_bits(bits: u16) -> Self {
        match bits {
            8 => BitDepth::UChar,
            16 => BitDepth::UShort,
            32 => BitDepth::Float,
            n => BitDepth::Other(n),
        }
    }

    pub fn bits(&self) -> u16 {
        match self {
            BitDepth::UChar => 8,
            BitDepth::UShort => 16,
            BitDepth::Float => 32,
            BitDepth::Other(n) => *n,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitDepth::UChar => write!(f, "uchar"),
            BitDepth::UShort => write!(f, "ushort"),
            BitDepth::Float => write!(f, "float"),
            BitDepth::Other(n) => write!(f, "{}bit", n),
        }
    }
}

/// Header metadata of a single image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Lowercase container/codec name, e.g. "png"
    pub format: String,
    pub depth: BitDepth,
    pub channels: u8,
}

impl fmt::Display for ImageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}, format: {}, depth: {}, channels: {}",
            self.width, self.height, self.format, self.depth, self.channels
        )
    }
}
