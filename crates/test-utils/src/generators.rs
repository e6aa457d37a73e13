//! Synthetic image generators.
//!
//! Patterns are chosen so that the expected value of any pixel can be
//! computed directly from its coordinates.

use image::{Rgba, RgbaImage};

/// A single opaque colour.
pub fn solid_image(width: u32, height: u32, colour: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(colour))
}

/// Black and white squares of `cell` pixels, white in the top-left corner.
pub fn checkerboard_image(width: u32, height: u32, cell: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

/// Red encodes the column and green the row, both modulo 256.
///
/// ```
/// use test_utils::coordinate_image;
///
/// let image = coordinate_image(300, 10);
/// assert_eq!(image.get_pixel(257, 3).0, [1, 3, 0, 255]);
/// ```
pub fn coordinate_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255]))
}

/// A horizontal ramp: every channel of column `x` is `x * 255 / (width - 1)`.
pub fn horizontal_ramp(width: u32, height: u32) -> RgbaImage {
    let span = width.saturating_sub(1).max(1);
    RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / span) as u8;
        Rgba([v, v, v, 255])
    })
}
