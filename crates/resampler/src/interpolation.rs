//! Interpolation methods for sampling RGBA source images.
//!
//! Coordinates are in pixel units with integer values at pixel centres.
//! Samples more than half a pixel outside the image are `None`.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Fully transparent RGBA pixel.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Interpolation method for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Closest source pixel.
    Nearest,
    /// Weighted blend of the four surrounding pixels, per channel.
    #[default]
    Bilinear,
}

impl InterpolationMethod {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "nearest" | "nn" => Self::Nearest,
            _ => Self::Bilinear,
        }
    }

    /// Get the method name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sample `source` at (x, y) with the given method.
///
/// With `wrap_x` the image is treated as horizontally periodic, as for a
/// full-globe equirectangular source.
#[inline]
pub fn sample(
    source: &RgbaImage,
    x: f64,
    y: f64,
    method: InterpolationMethod,
    wrap_x: bool,
) -> Option<[u8; 4]> {
    match method {
        InterpolationMethod::Nearest => sample_nearest(source, x, y, wrap_x),
        InterpolationMethod::Bilinear => sample_bilinear(source, x, y, wrap_x),
    }
}

/// Nearest neighbour interpolation.
#[inline]
pub fn sample_nearest(source: &RgbaImage, x: f64, y: f64, wrap_x: bool) -> Option<[u8; 4]> {
    let (width, height) = source.dimensions();
    if !x.is_finite() || !y.is_finite() || width == 0 || height == 0 {
        return None;
    }

    let row = y.round();
    if row < 0.0 || row >= height as f64 {
        return None;
    }

    let mut col = x.round();
    if wrap_x {
        col = col.rem_euclid(width as f64);
    } else if col < 0.0 || col >= width as f64 {
        return None;
    }

    Some(source.get_pixel(col as u32, row as u32).0)
}

/// Bilinear interpolation.
///
/// Each channel, alpha included, is blended independently.
#[inline]
pub fn sample_bilinear(source: &RgbaImage, x: f64, y: f64, wrap_x: bool) -> Option<[u8; 4]> {
    let (width, height) = source.dimensions();
    if !x.is_finite() || !y.is_finite() || width == 0 || height == 0 {
        return None;
    }

    let max_x = width as f64 - 0.5;
    let max_y = height as f64 - 0.5;
    if y < -0.5 || y >= max_y || (!wrap_x && (x < -0.5 || x >= max_x)) {
        return None;
    }

    let x0 = x.floor();
    let y0 = y.floor();
    let xf = (x - x0) as f32;
    let yf = (y - y0) as f32;

    let (col0, col1) = if wrap_x {
        let c0 = x0.rem_euclid(width as f64) as u32;
        (c0, (c0 + 1) % width)
    } else {
        (clamp_index(x0, width), clamp_index(x0 + 1.0, width))
    };
    let row0 = clamp_index(y0, height);
    let row1 = clamp_index(y0 + 1.0, height);

    let p00 = source.get_pixel(col0, row0).0;
    let p10 = source.get_pixel(col1, row0).0;
    let p01 = source.get_pixel(col0, row1).0;
    let p11 = source.get_pixel(col1, row1).0;

    let mut out = [0u8; 4];
    for channel in 0..4 {
        let top = p00[channel] as f32 * (1.0 - xf) + p10[channel] as f32 * xf;
        let bottom = p01[channel] as f32 * (1.0 - xf) + p11[channel] as f32 * xf;
        out[channel] = (top * (1.0 - yf) + bottom * yf).round().clamp(0.0, 255.0) as u8;
    }

    Some(out)
}

#[inline]
fn clamp_index(value: f64, len: u32) -> u32 {
    value.clamp(0.0, (len - 1) as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn grid_3x3() -> RgbaImage {
        RgbaImage::from_fn(3, 3, |x, y| {
            let v = (1 + x + 3 * y) as u8 * 10;
            Rgba([v, v, v, 255])
        })
    }

    #[test]
    fn test_nearest_interpolate() {
        let image = grid_3x3();

        assert_eq!(sample_nearest(&image, 0.0, 0.0, false).unwrap()[0], 10);
        assert_eq!(sample_nearest(&image, 1.0, 1.0, false).unwrap()[0], 50);
        assert_eq!(sample_nearest(&image, 0.4, 0.4, false).unwrap()[0], 10);
        assert_eq!(sample_nearest(&image, 0.6, 0.6, false).unwrap()[0], 50);
    }

    #[test]
    fn test_nearest_out_of_bounds() {
        let image = grid_3x3();
        assert!(sample_nearest(&image, -0.6, 0.0, false).is_none());
        assert!(sample_nearest(&image, 2.6, 0.0, false).is_none());
        assert!(sample_nearest(&image, 0.0, 3.0, false).is_none());
        assert!(sample_nearest(&image, f64::NAN, 0.0, false).is_none());
    }

    #[test]
    fn test_nearest_wraps() {
        let image = grid_3x3();
        assert_eq!(sample_nearest(&image, -1.0, 0.0, true).unwrap()[0], 30);
        assert_eq!(sample_nearest(&image, 3.0, 0.0, true).unwrap()[0], 10);
    }

    #[test]
    fn test_empty_image_has_no_samples() {
        for image in [RgbaImage::new(0, 3), RgbaImage::new(3, 0)] {
            for wrap_x in [false, true] {
                assert!(sample_nearest(&image, 0.0, 0.0, wrap_x).is_none());
                assert!(sample_bilinear(&image, 0.0, 0.0, wrap_x).is_none());
            }
        }
    }

    #[test]
    fn test_bilinear_interpolate() {
        let image = RgbaImage::from_fn(2, 2, |x, y| {
            let v = [10u8, 20, 30, 40][(x + 2 * y) as usize];
            Rgba([v, 0, 255 - v, 255])
        });

        // Corners
        assert_eq!(sample_bilinear(&image, 0.0, 0.0, false).unwrap()[0], 10);
        assert_eq!(sample_bilinear(&image, 1.0, 0.0, false).unwrap()[0], 20);
        assert_eq!(sample_bilinear(&image, 0.0, 1.0, false).unwrap()[0], 30);
        assert_eq!(sample_bilinear(&image, 1.0, 1.0, false).unwrap()[0], 40);

        // Centre, per channel
        let centre = sample_bilinear(&image, 0.5, 0.5, false).unwrap();
        assert_eq!(centre, [25, 0, 230, 255]);
    }

    #[test]
    fn test_bilinear_blends_alpha() {
        let image = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([200, 200, 200, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        let mid = sample_bilinear(&image, 0.5, 0.0, false).unwrap();
        assert_eq!(mid, [100, 100, 100, 128]);
    }

    #[test]
    fn test_bilinear_wraps_seam() {
        let image = RgbaImage::from_fn(4, 1, |x, _| if x == 0 { Rgba([0, 0, 0, 255]) } else if x == 3 { Rgba([100, 100, 100, 255]) } else { Rgba([50, 50, 50, 255]) });

        // Halfway between the last and first columns
        let seam = sample_bilinear(&image, 3.5, 0.0, true).unwrap();
        assert_eq!(seam[0], 50);
        assert!(sample_bilinear(&image, 3.6, 0.0, false).is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(InterpolationMethod::from_str("Nearest"), InterpolationMethod::Nearest);
        assert_eq!(InterpolationMethod::from_str("BILINEAR"), InterpolationMethod::Bilinear);
        assert_eq!(InterpolationMethod::from_str("cubic"), InterpolationMethod::Bilinear);
    }
}
