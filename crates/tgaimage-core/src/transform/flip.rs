//! Flip/mirror transforms over the pixel buffer.

use serde::{Deserialize, Serialize};

use crate::image::TgaImage;

/// The axis along which an image is mirrored.
///
/// These three cases form a closed set. A flag combination would also admit
/// an empty or out-of-range state with no defined transform, so the type
/// rules those out instead of rejecting them at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipDirection {
    /// Reverse the order of the rows; columns keep their order.
    Vertical,
    /// Reverse the pixels within each row; rows keep their order.
    Horizontal,
    /// Mirror along both axes at once.
    Both,
}

impl TgaImage {
    /// Mirror the image in place along the given direction.
    ///
    /// All three directions run in O(width * height) time with O(1)
    /// auxiliary space.
    pub fn flip(&mut self, direction: FlipDirection) {
        // Zero-sized images have no pixels to move.
        if self.pixel_count() == 0 {
            return;
        }

        let width = self.width() as usize;
        let height = self.height() as usize;
        let pixels = self.pixels_mut();

        match direction {
            FlipDirection::Vertical => {
                for y in 0..height / 2 {
                    let top = y * width;
                    let bottom = (height - 1 - y) * width;
                    for x in 0..width {
                        pixels.swap(top + x, bottom + x);
                    }
                }
            }
            FlipDirection::Horizontal => {
                for row in pixels.chunks_exact_mut(width) {
                    row.reverse();
                }
            }
            // Mirroring along both axes at once reverses the flattened
            // sequence end-to-end.
            FlipDirection::Both => pixels.reverse(),
        }
    }

    /// Return a mirrored copy, leaving `self` untouched.
    pub fn flipped(&self, direction: FlipDirection) -> TgaImage {
        let mut image = self.clone();
        image.flip(direction);
        image
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
