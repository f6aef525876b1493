//! The pixel converter: packed raw bytes → canonical RGBA8.

use imgref::ImgVec;
use rgb::Rgba;

use crate::error::{Error, Result};
use crate::load::RawImage;

/// Convert a validated raw buffer into an 8-bit RGBA image.
///
/// Pixels are visited in row-major raw order; each packed pixel is decoded
/// and widened per [`RawFormat`](crate::RawFormat). The output is a fresh
/// contiguous buffer with stride = width. A deterministic pure transform:
/// once the size invariant holds nothing here can fail, and converting the
/// same input twice yields byte-identical buffers.
pub fn convert(raw: &RawImage) -> Result<ImgVec<Rgba<u8>>> {
    // RawImage::new enforces this, but the fields are public.
    if raw.width == 0 || raw.height == 0 {
        return Err(Error::Empty);
    }
    let bpp = raw.format.bytes_per_pixel();
    let expected = raw.width * raw.height * bpp;
    if raw.data.len() != expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: raw.data.len(),
        });
    }

    let pixels: Vec<Rgba<u8>> = raw
        .data
        .chunks_exact(bpp)
        .map(|px| raw.format.decode_pixel(px))
        .collect();

    Ok(ImgVec::new(pixels, raw.width, raw.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::RawFormat;

    fn image(data: Vec<u8>, w: usize, h: usize, format: RawFormat) -> RawImage {
        RawImage::new(data, w, h, format).unwrap()
    }

    #[test]
    fn bgra4444_full_range_corners() {
        // One pixel with B=15, A=0, R=15, G=0.
        let raw = image(vec![0xF0, 0xF0], 1, 1, RawFormat::Bgra4444);
        let img = convert(&raw).unwrap();
        let px = img.buf()[0];
        assert_eq!((px.r, px.g, px.b, px.a), (255, 0, 255, 0));
    }

    #[test]
    fn argb4444_full_range_corners() {
        // One pixel with A=15, R=0, G=15, B=0.
        let raw = image(vec![0xF0, 0xF0], 1, 1, RawFormat::Argb4444);
        let img = convert(&raw).unwrap();
        let px = img.buf()[0];
        assert_eq!((px.r, px.g, px.b, px.a), (0, 255, 0, 255));
    }

    #[test]
    fn argb8888_reorders_channels_verbatim() {
        let raw = image(vec![0x11, 0x22, 0x33, 0x44], 1, 1, RawFormat::Argb8888);
        let img = convert(&raw).unwrap();
        let px = img.buf()[0];
        assert_eq!((px.r, px.g, px.b, px.a), (0x22, 0x33, 0x44, 0x11));
    }

    #[test]
    fn row_major_order_preserved() {
        // 2x2 Argb8888 image with a distinct red value per pixel.
        let mut data = Vec::new();
        for i in 0..4u8 {
            data.extend_from_slice(&[0xFF, i, 0, 0]);
        }
        let raw = image(data, 2, 2, RawFormat::Argb8888);
        let img = convert(&raw).unwrap();
        let reds: Vec<u8> = img.pixels().map(|p| p.r).collect();
        assert_eq!(reds, [0, 1, 2, 3]);
        assert_eq!((img.width(), img.height()), (2, 2));
    }

    #[test]
    fn output_length_is_pixel_count() {
        let raw = image(vec![0u8; 3 * 5 * 2], 3, 5, RawFormat::Bgra4444);
        let img = convert(&raw).unwrap();
        assert_eq!(img.buf().len(), 15);
        assert_eq!(img.stride(), 3);
    }

    #[test]
    fn size_mismatch_rejected_before_decoding() {
        // Bypass RawImage::new to hand convert a broken buffer.
        let raw = RawImage {
            data: vec![0u8; 7],
            width: 2,
            height: 2,
            format: RawFormat::Bgra4444,
        };
        assert!(matches!(
            convert(&raw).unwrap_err(),
            Error::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn zero_area_image_is_an_error_not_a_panic() {
        // Hand-built 0x0 image bypassing RawImage::new.
        let raw = RawImage {
            data: Vec::new(),
            width: 0,
            height: 0,
            format: RawFormat::Bgra4444,
        };
        assert!(matches!(convert(&raw).unwrap_err(), Error::Empty));
    }

    #[test]
    fn conversion_is_deterministic() {
        let data: Vec<u8> = (0..=255).collect();
        let raw = image(data, 8, 16, RawFormat::Bgra4444);
        let a = convert(&raw).unwrap();
        let b = convert(&raw).unwrap();
        assert_eq!(a.buf(), b.buf());
    }
}
