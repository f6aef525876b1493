//! Source pixel layouts and their channel rescale rules.

use core::str::FromStr;

use rgb::Rgba;

/// Supported raw source layouts.
///
/// Each variant fixes three things: the packed size of one pixel, the
/// position of the A, R, G and B channels inside those bytes, and the rule
/// that widens a native-depth channel value to 8 bits. The two 4-bit
/// formats deliberately carry different rescale rules (see
/// [`scale4`] and [`replicate4`]); they are kept as separate code paths
/// even though they agree at every 4-bit input.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawFormat {
    /// 2 bytes/pixel, nibble-packed: byte0 = B|A, byte1 = R|G
    /// (high|low nibble). Channels widened with the rounded scale.
    Bgra4444,
    /// 2 bytes/pixel, nibble-packed: byte0 = A|R, byte1 = G|B.
    /// Channels widened by bit replication.
    Argb4444,
    /// 4 bytes/pixel, sequential A,R,G,B bytes. No widening, the
    /// conversion is a pure channel reorder.
    Argb8888,
}

impl RawFormat {
    /// Packed size of one pixel in bytes.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            RawFormat::Bgra4444 | RawFormat::Argb4444 => 2,
            RawFormat::Argb8888 => 4,
        }
    }

    /// Native bit depth of one channel.
    pub fn channel_depth(self) -> u8 {
        match self {
            RawFormat::Bgra4444 | RawFormat::Argb4444 => 4,
            RawFormat::Argb8888 => 8,
        }
    }

    /// Decode one packed pixel into canonical RGBA at 8-bit depth.
    ///
    /// `bytes` must be exactly [`bytes_per_pixel`](Self::bytes_per_pixel)
    /// long; the converter guarantees this via `chunks_exact`.
    pub fn decode_pixel(self, bytes: &[u8]) -> Rgba<u8> {
        debug_assert_eq!(bytes.len(), self.bytes_per_pixel());
        match self {
            RawFormat::Bgra4444 => {
                let b4 = bytes[0] >> 4;
                let a4 = bytes[0] & 0x0F;
                let r4 = bytes[1] >> 4;
                let g4 = bytes[1] & 0x0F;
                Rgba {
                    r: scale4(r4),
                    g: scale4(g4),
                    b: scale4(b4),
                    a: scale4(a4),
                }
            }
            RawFormat::Argb4444 => {
                let a4 = bytes[0] >> 4;
                let r4 = bytes[0] & 0x0F;
                let g4 = bytes[1] >> 4;
                let b4 = bytes[1] & 0x0F;
                Rgba {
                    r: replicate4(r4),
                    g: replicate4(g4),
                    b: replicate4(b4),
                    a: replicate4(a4),
                }
            }
            RawFormat::Argb8888 => Rgba {
                r: bytes[1],
                g: bytes[2],
                b: bytes[3],
                a: bytes[0],
            },
        }
    }

    /// CLI names, matching [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            RawFormat::Bgra4444 => "bgra4444",
            RawFormat::Argb4444 => "argb4444",
            RawFormat::Argb8888 => "argb8888",
        }
    }
}

/// Widen a 4-bit value to 8 bits with a rounded scale:
/// `(v4 * 255 + 7) / 15`. Maps 0 → 0 and 15 → 255.
pub(crate) fn scale4(v4: u8) -> u8 {
    debug_assert!(v4 < 16);
    ((v4 as u16 * 255 + 7) / 15) as u8
}

/// Widen a 4-bit value to 8 bits by bit replication:
/// `(v4 << 4) | v4`. Maps 0 → 0 and 15 → 255.
pub(crate) fn replicate4(v4: u8) -> u8 {
    debug_assert!(v4 < 16);
    (v4 << 4) | v4
}

impl core::fmt::Display for RawFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RawFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bgra4444" => Ok(RawFormat::Bgra4444),
            "argb4444" => Ok(RawFormat::Argb4444),
            "argb8888" => Ok(RawFormat::Argb8888),
            other => Err(format!(
                "unknown format {other:?} (expected bgra4444, argb4444 or argb8888)"
            )),
        }
    }
}
