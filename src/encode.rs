//! Output-container seam and its PNG implementation.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use imgref::ImgRef;
use rgb::{ComponentBytes, Rgba};

use crate::error::Result;

/// The capability the converter hands its output to: encode an 8-bit RGBA
/// image into a lossless compressed container.
///
/// Implementations receive width, height and stride through the `ImgRef`
/// and must treat the pixel data as final — no resampling, no color
/// management.
pub trait RgbaEncoder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encode the image, returning the container bytes.
    fn encode_rgba8(&self, img: ImgRef<'_, Rgba<u8>>) -> std::result::Result<Vec<u8>, Self::Error>;
}

/// [`RgbaEncoder`] backed by the `png` crate.
///
/// Emits RGBA, 8 bits per channel, default compression.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder;

impl PngEncoder {
    /// Encode `img` and write it to `path` through a buffered writer.
    ///
    /// The file is created only here, after conversion has already
    /// succeeded, so a failing pipeline never leaves a partial image
    /// behind an earlier stage.
    pub fn write_rgba8(&self, img: ImgRef<'_, Rgba<u8>>, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.encode_into(img, writer)?;
        Ok(())
    }

    fn encode_into<W: std::io::Write>(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        writer: W,
    ) -> std::result::Result<(), png::EncodingError> {
        let (buf, width, height) = img.to_contiguous_buf();
        let mut encoder = png::Encoder::new(writer, width as u32, height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(buf.as_bytes())?;
        writer.finish()
    }
}

impl RgbaEncoder for PngEncoder {
    type Error = png::EncodingError;

    fn encode_rgba8(&self, img: ImgRef<'_, Rgba<u8>>) -> std::result::Result<Vec<u8>, Self::Error> {
        let mut data = Vec::new();
        self.encode_into(img, &mut data)?;
        Ok(data)
    }
}
