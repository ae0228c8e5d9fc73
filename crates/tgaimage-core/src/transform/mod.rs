//! Image transformations.
//!
//! Flips reorder the pixels of a [`TgaImage`](crate::image::TgaImage) in
//! place without changing their values: vertically (row order), horizontally
//! (order within each row), or along both axes at once.

mod flip;

pub use flip::FlipDirection;
