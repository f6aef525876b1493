//! Convert raw packed-channel pixel dumps to lossless RGBA images.
//!
//! This crate turns a headerless fixed-format pixel buffer into an 8-bit
//! RGBA image ready for PNG encoding:
//!
//! - [`RawFormat`] — the supported source layouts and their rescale rules
//! - [`load_raw`] / [`RawImage`] — file loading with size validation and
//!   optional square-dimension inference
//! - [`convert`] — the pixel converter producing an `ImgVec<Rgba<u8>>`
//! - [`RgbaEncoder`] / [`PngEncoder`] — the output-container seam and its
//!   PNG implementation
//! - [`Error`] — the unified error type
//!
//! The pipeline is strictly `load_raw` → `convert` → encode. Each stage
//! owns its buffer; nothing is retained after the encoded bytes exist.
//!
//! ```no_run
//! use rawpix::{load_raw, convert, PngEncoder, RgbaEncoder, RawFormat};
//!
//! let raw = load_raw("sprite.raw".as_ref(), RawFormat::Bgra4444, None)?;
//! let rgba = convert(&raw)?;
//! let png = PngEncoder::default().encode_rgba8(rgba.as_ref())?;
//! std::fs::write("sprite.png", png)?;
//! # Ok::<(), rawpix::Error>(())
//! ```

#![forbid(unsafe_code)]

mod convert;
mod encode;
mod error;
mod format;
mod geometry;
mod load;

pub use convert::convert;
pub use encode::{PngEncoder, RgbaEncoder};
pub use error::{Error, Result};
pub use format::RawFormat;
pub use geometry::{SQUARE_TOLERANCE, infer_square};
pub use load::{RawImage, load_raw};

// Re-exports for callers building on the typed pixel buffers.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb::Rgba;
