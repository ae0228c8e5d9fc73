//! Uncompressed true-color TGA encoding.
//!
//! The output follows the TGA v2 file layout: an 18-byte header, the pixel
//! payload (three `[b, g, r]` bytes per pixel in row-major order, no padding
//! or row alignment), and the fixed 26-byte footer ending in the
//! `TRUEVISION-XFILE` signature block. Every field is written byte by byte;
//! the encoder never relies on host memory layout or endianness.

use thiserror::Error;

use crate::color::Rgb;
use crate::image::TgaImage;

/// Length of the TGA file header in bytes.
const HEADER_LEN: usize = 18;
/// Length of the TGA v2 file footer in bytes.
const FOOTER_LEN: usize = 26;
/// Image type 2: uncompressed, true-color.
const IMAGE_TYPE_TRUE_COLOR: u8 = 2;
/// Bits per pixel: three 8-bit channels, no attribute bits.
const PIXEL_DEPTH: u8 = 24;
/// Image descriptor: the first pixel row is the top row of the image.
const IMAGE_DESCRIPTOR: u8 = 32;
/// Signature identifying the v2 footer.
const SIGNATURE: &[u8; 16] = b"TRUEVISION-XFILE";

/// Errors that can occur while encoding a TGA file.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height doesn't fit the header's 16-bit dimension fields.
    #[error("Image dimensions {width}x{height} exceed the TGA limit of 65535")]
    DimensionsTooLarge { width: u32, height: u32 },
}

/// Encode an image as an uncompressed true-color `.tga` file.
///
/// The output is `18 + 3 * width * height + 26` bytes: header, pixel
/// payload, footer, concatenated with no other framing. Encoding is
/// deterministic and allocates a fresh buffer per call.
///
/// # Errors
///
/// Returns [`EncodeError::DimensionsTooLarge`] if either dimension exceeds
/// 65535. Out-of-range dimensions are rejected outright; truncating them to
/// their low 16 bits would silently describe a different image.
///
/// # Example
///
/// ```
/// use tgaimage_core::{encode_tga, Rgb, TgaImage};
///
/// let image = TgaImage::new(2, 2, Rgb::RED);
/// let bytes = encode_tga(&image).unwrap();
/// assert_eq!(bytes.len(), 56);
/// assert_eq!(&bytes[18..21], &[0, 0, 255]); // first pixel, as [b, g, r]
/// ```
pub fn encode_tga(image: &TgaImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
        (Ok(width), Ok(height)) => (width, height),
        _ => {
            return Err(EncodeError::DimensionsTooLarge {
                width: image.width(),
                height: image.height(),
            })
        }
    };

    let mut data = Vec::with_capacity(HEADER_LEN + image.pixel_count() * 3 + FOOTER_LEN);
    data.extend_from_slice(&encode_header(width, height));
    data.extend_from_slice(&encode_pixels(image.pixels()));
    data.extend_from_slice(&encode_footer());
    Ok(data)
}

impl TgaImage {
    /// Encode this image as a `.tga` file; shorthand for [`encode_tga`].
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DimensionsTooLarge`] if either dimension
    /// exceeds 65535.
    pub fn to_tga(&self) -> Result<Vec<u8>, EncodeError> {
        encode_tga(self)
    }
}

/// Build the 18-byte file header for an image of the given dimensions.
///
/// Only the image type, dimensions, pixel depth and descriptor are set; the
/// ID length, color map fields and origin offsets stay zero.
fn encode_header(width: u16, height: u16) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[2] = IMAGE_TYPE_TRUE_COLOR;
    header[12..14].copy_from_slice(&width.to_le_bytes());
    header[14..16].copy_from_slice(&height.to_le_bytes());
    header[16] = PIXEL_DEPTH;
    header[17] = IMAGE_DESCRIPTOR;
    header
}

/// Serialize the pixels in buffer order, three `[b, g, r]` bytes each.
fn encode_pixels(pixels: &[Rgb]) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixels.len() * 3);
    for pixel in pixels {
        data.extend_from_slice(&pixel.to_bgr_bytes());
    }
    data
}

/// Build the constant 26-byte v2 footer.
///
/// The extension area and developer directory offsets are zero (neither
/// section is written), followed by the signature, a `.`, and a final zero.
fn encode_footer() -> [u8; FOOTER_LEN] {
    let mut footer = [0u8; FOOTER_LEN];
    footer[8..24].copy_from_slice(SIGNATURE);
    footer[24] = b'.';
    footer
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (0u32..=32, 0u32..=32)
    }

    /// Strategy for generating an arbitrary fill color.
    fn color_strategy() -> impl Strategy<Value = Rgb> {
        any::<(u8, u8, u8)>().prop_map(Rgb::from)
    }

    proptest! {
        /// Property: The output length is always 44 + 3 * width * height.
        #[test]
        fn prop_encoded_length(
            (width, height) in dimensions_strategy(),
            fill in color_strategy(),
        ) {
            let image = TgaImage::new(width, height, fill);
            let bytes = encode_tga(&image).unwrap();
            prop_assert_eq!(bytes.len(), 44 + 3 * (width * height) as usize);
        }

        /// Property: Same image always produces the same bytes.
        #[test]
        fn prop_encode_is_deterministic(
            (width, height) in dimensions_strategy(),
            fill in color_strategy(),
        ) {
            let image = TgaImage::new(width, height, fill);
            prop_assert_eq!(encode_tga(&image).unwrap(), encode_tga(&image).unwrap());
        }

        /// Property: The header always round-trips the dimensions through
        /// its little-endian fields.
        #[test]
        fn prop_header_dimensions_round_trip(width in any::<u16>(), height in any::<u16>()) {
            let header = encode_header(width, height);
            prop_assert_eq!(u16::from_le_bytes([header[12], header[13]]), width);
            prop_assert_eq!(u16::from_le_bytes([header[14], header[15]]), height);
        }

        /// Property: The `image` crate decodes the output back to the same
        /// pixels.
        #[test]
        fn prop_decode_back_round_trip(
            (width, height) in (1u32..=8, 1u32..=8),
            fill in color_strategy(),
        ) {
            let source = TgaImage::new(width, height, fill);
            let bytes = encode_tga(&source).unwrap();

            let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Tga)
                .unwrap()
                .to_rgb8();
            prop_assert_eq!(decoded.dimensions(), (width, height));
            for pixel in decoded.pixels() {
                prop_assert_eq!(pixel, &image::Rgb([fill.r, fill.g, fill.b]));
            }
        }
    }
}
