//! File loading: raw dump → validated owned buffer with dimensions.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::format::RawFormat;
use crate::geometry::infer_square;

/// A raw pixel dump held in memory, with its layout resolved.
///
/// Produced by [`load_raw`]; the size invariant
/// `data.len() == width * height * format.bytes_per_pixel()` holds by
/// construction there. [`RawImage::new`] re-checks it for buffers built
/// directly.
#[derive(Debug)]
pub struct RawImage {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub format: RawFormat,
}

impl RawImage {
    /// Wrap an in-memory buffer, validating the size invariant.
    ///
    /// Zero-area dimensions are rejected: an image with no pixels has
    /// nothing to encode, and downstream buffer types require non-zero
    /// width and height.
    pub fn new(data: Vec<u8>, width: usize, height: usize, format: RawFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Empty);
        }
        let expected = width * height * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Pixel count.
    pub fn pixels(&self) -> usize {
        self.width * self.height
    }
}

/// Read a raw pixel dump from `path`.
///
/// With explicit `dims`, exactly `width * height * bytes_per_pixel` bytes
/// are read; a shorter file fails with [`Error::Io`]
/// (`ErrorKind::UnexpectedEof`) and trailing bytes are left unread.
///
/// Without `dims`, the file length must be a whole number of pixels
/// ([`Error::Misaligned`] otherwise) and square dimensions are inferred
/// from the pixel count per [`infer_square`], dropping up to
/// [`SQUARE_TOLERANCE`](crate::SQUARE_TOLERANCE) trailing pixels.
///
/// The file handle is scoped to this call and closed on every path.
pub fn load_raw(path: &Path, format: RawFormat, dims: Option<(usize, usize)>) -> Result<RawImage> {
    let mut file = File::open(path)?;

    let (width, height) = match dims {
        Some(dims) => dims,
        None => {
            let len = file.metadata()?.len();
            let bpp = format.bytes_per_pixel();
            if len % bpp as u64 != 0 {
                return Err(Error::Misaligned {
                    len,
                    bytes_per_pixel: bpp,
                });
            }
            let pixels = (len / bpp as u64) as usize;
            let side = infer_square(pixels)?;
            info!("{pixels} pixels in {path:?}, inferred {side}x{side}");
            (side, side)
        }
    };

    let expected = width * height * format.bytes_per_pixel();
    let mut data = vec![0u8; expected];
    file.read_exact(&mut data)?;

    RawImage::new(data, width, height, format)
}
