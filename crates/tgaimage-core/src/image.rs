//! The in-memory pixel buffer.

use thiserror::Error;

use crate::color::Rgb;

/// Errors that can occur when constructing a [`TgaImage`].
#[derive(Debug, Error)]
pub enum ImageError {
    /// Pixel data length doesn't match the given dimensions.
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// A mutable RGB image with row-major pixel storage.
///
/// The pixel at `(x, y)` lives at index `y * width + x`; the buffer length is
/// always exactly `width * height`. Either dimension may be zero, which
/// yields an image without pixels (still encodable).
///
/// # Example
///
/// ```
/// use tgaimage_core::{Rgb, TgaImage};
///
/// let mut image = TgaImage::black(3, 1);
/// image.set(0, 0, Rgb::RED);
/// image.set(1, 0, Rgb::GREEN);
/// image.set(2, 0, Rgb::BLUE);
/// assert_eq!(image.get(1, 0), Rgb::GREEN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TgaImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl TgaImage {
    /// Create an image of the given dimensions with every pixel set to
    /// `fill`.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Create an all-black image of the given dimensions.
    pub fn black(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgb::BLACK)
    }

    /// Create an image from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelCountMismatch`] if `pixels.len()` is not
    /// exactly `width * height`; no image exists in that case.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ImageError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// The flattened row-major pixel data.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable access for the transform module. A slice can reorder pixels
    /// but not change their count, so the length invariant holds.
    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        let index = self.pixel_index(x, y);
        self.pixels[index]
    }

    /// Overwrite the pixel at `(x, y)`. No other pixel changes.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image; the image is left
    /// unmodified.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let index = self.pixel_index(x, y);
        self.pixels[index] = color;
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel index ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
