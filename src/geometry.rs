//! Square-dimension inference from a bare pixel count.

use crate::error::{Error, Result};

/// Maximum distance (in pixels) between a pixel count and the nearest
/// perfect square at or below it for the input to still be treated as
/// square.
///
/// Pixel counts inside the tolerance are accepted as `d × d` with up to
/// this many trailing pixels silently dropped from the output. This
/// reproduces the historical behavior; a strict mode would use 0.
pub const SQUARE_TOLERANCE: usize = 10;

/// Infer the side length of a square image from its pixel count.
///
/// Computes `d = isqrt(pixel_count)` and accepts iff `pixel_count - d*d`
/// is within [`SQUARE_TOLERANCE`]. Returns [`Error::NotSquare`] otherwise.
pub fn infer_square(pixel_count: usize) -> Result<usize> {
    let side = pixel_count.isqrt();
    // isqrt never overshoots, so the distance is pixel_count - side*side.
    if pixel_count - side * side <= SQUARE_TOLERANCE {
        Ok(side)
    } else {
        Err(Error::NotSquare {
            pixels: pixel_count,
            side,
        })
    }
}
