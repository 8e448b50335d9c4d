//! Error types for hex parsing and bitmap sampling.

use thiserror::Error;

/// Result alias for hex validation.
pub type Result<T> = std::result::Result<T, HexError>;

/// Reasons a color string is rejected by the hex normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Input was absent or blank after trimming
    #[error("no color input provided")]
    Empty,

    /// Input contains characters outside `0-9a-f`
    #[error("invalid hex digits in '{input}'")]
    InvalidDigits {
        /// The trimmed, lower-cased input without its `#`
        input: String,
    },

    /// Digit count is neither 3 nor 6
    #[error("invalid hex length {len}, expected 3 or 6 digits")]
    InvalidLength {
        /// Number of digits after the optional `#`
        len: usize,
    },
}

/// Reasons a pixel could not be read from a bitmap.
///
/// These never escape [`get_target_color`](crate::sampler::get_target_color);
/// they are exposed for callers using [`PixelSource`](crate::sampler::PixelSource)
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Coordinates fall outside the bitmap
    #[error("pixel ({x}, {y}) is outside {width}x{height} image")]
    OutOfBounds {
        /// Requested column
        x: i32,
        /// Requested row
        y: i32,
        /// Bitmap width
        width: u32,
        /// Bitmap height
        height: u32,
    },

    /// No bitmap was supplied
    #[error("no image to sample")]
    NoImage,
}
