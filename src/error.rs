//! Unified error type for the load → convert → encode pipeline.

use thiserror::Error;

/// Everything that can go wrong between a raw dump and an encoded image.
///
/// All errors are fatal: there is no retry and no partial output. The
/// encoder only runs after the input is fully validated and converted, so
/// a failing pipeline never leaves an output file behind.
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be opened or read, including short reads
    /// (`ErrorKind::UnexpectedEof` from a truncated file).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// File length is not a whole number of pixels for the source format.
    #[error("file length {len} is not divisible by {bytes_per_pixel} bytes per pixel")]
    Misaligned { len: u64, bytes_per_pixel: usize },

    /// Square-dimension inference failed: the pixel count is too far from
    /// a perfect square.
    #[error("input does not represent a square image ({pixels} pixels, nearest square {side}x{side})")]
    NotSquare { pixels: usize, side: usize },

    /// Buffer length disagrees with width × height × bytes-per-pixel.
    #[error("raw buffer is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The image has no pixels (empty input, or a zero width/height).
    #[error("input contains no pixels")]
    Empty,

    /// The output-container encoder failed.
    #[error("failed to write image: {0}")]
    Encode(#[from] png::EncodingError),
}

pub type Result<T> = std::result::Result<T, Error>;
