//! TGA image construction and encoding.
//!
//! This crate provides an in-memory RGB pixel buffer ([`TgaImage`]) together
//! with an encoder that serializes it as an uncompressed true-color Targa
//! (`.tga`) file: an 18-byte header, the row-major `[b, g, r]` pixel payload,
//! and the fixed 26-byte TGA v2 footer.
//!
//! Writing the produced bytes to disk, and reading existing files back into a
//! buffer, are left to the caller.
//!
//! # Example
//!
//! ```
//! use tgaimage_core::{encode_tga, FlipDirection, Rgb, TgaImage};
//!
//! let mut image = TgaImage::new(2, 2, Rgb::WHITE);
//! image.set(0, 0, Rgb::RED);
//! image.flip(FlipDirection::Horizontal);
//! assert_eq!(image.get(1, 0), Rgb::RED);
//!
//! let bytes = encode_tga(&image).unwrap();
//! assert_eq!(bytes.len(), 18 + 2 * 2 * 3 + 26);
//! ```

pub mod color;
pub mod encode;
pub mod image;
pub mod transform;

pub use crate::color::Rgb;
pub use crate::encode::{encode_tga, EncodeError};
pub use crate::image::{ImageError, TgaImage};
pub use crate::transform::FlipDirection;
