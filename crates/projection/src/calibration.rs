//! Pixel calibration between image coordinates and scan angles.
//!
//! A full-disk image of `N` pixels is centred on nadir, so the offset is
//! `N / 2 - 0.5` pixels and the scale is the instrument's angular pitch.
//! The vertical scale is negative: row 0 is the northern edge.

use sat_common::{ProjectionError, Result};

/// Affine map between pixel coordinates and scan angles.
///
/// `angle = (pixel - offset) * scale`, independently per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanCalibration {
    /// Width and height of the full-disk image in pixels.
    pub image_size: u32,
    /// Radians per column.
    pub x_scale: f64,
    /// Column at which x = 0.
    pub x_offset: f64,
    /// Radians per row (negative, north up).
    pub y_scale: f64,
    /// Row at which y = 0.
    pub y_offset: f64,
}

impl ScanCalibration {
    /// GOES-R ABI 0.5 km full disk.
    pub const KM_0_5: ScanCalibration = ScanCalibration {
        image_size: 21696,
        x_scale: 0.000014,
        x_offset: 10847.5,
        y_scale: -0.000014,
        y_offset: 10847.5,
    };

    /// GOES-R ABI 1 km full disk.
    pub const KM_1: ScanCalibration = ScanCalibration {
        image_size: 10848,
        x_scale: 0.000028,
        x_offset: 5423.5,
        y_scale: -0.000028,
        y_offset: 5423.5,
    };

    /// GOES-R ABI 2 km full disk.
    pub const KM_2: ScanCalibration = ScanCalibration {
        image_size: 5424,
        x_scale: 0.000056,
        x_offset: 2711.5,
        y_scale: -0.000056,
        y_offset: 2711.5,
    };

    /// GOES-R ABI 4 km full disk.
    pub const KM_4: ScanCalibration = ScanCalibration {
        image_size: 2712,
        x_scale: 0.000112,
        x_offset: 1355.5,
        y_scale: -0.000112,
        y_offset: 1355.5,
    };

    /// All supported presets, finest first.
    pub const PRESETS: [ScanCalibration; 4] = [Self::KM_0_5, Self::KM_1, Self::KM_2, Self::KM_4];

    /// Create a custom calibration.
    pub fn new(image_size: u32, x_scale: f64, x_offset: f64, y_scale: f64, y_offset: f64) -> Result<Self> {
        if image_size == 0 {
            return Err(ProjectionError::InvalidCalibration(
                "image_size must be > 0".to_string(),
            ));
        }

        for (name, value) in [("x_scale", x_scale), ("y_scale", y_scale)] {
            if !value.is_finite() || value == 0.0 {
                return Err(ProjectionError::InvalidCalibration(format!(
                    "{} must be finite and non-zero, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [("x_offset", x_offset), ("y_offset", y_offset)] {
            if !value.is_finite() {
                return Err(ProjectionError::InvalidCalibration(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        Ok(Self {
            image_size,
            x_scale,
            x_offset,
            y_scale,
            y_offset,
        })
    }

    /// Centred full-disk calibration with a symmetric angular pitch.
    pub fn centred(image_size: u32, scale: f64) -> Result<Self> {
        let offset = image_size as f64 / 2.0 - 0.5;
        Self::new(image_size, scale, offset, -scale, offset)
    }

    /// Look up the preset for a full-disk image width.
    pub fn for_image_size(image_size: u32) -> Option<Self> {
        Self::PRESETS
            .iter()
            .find(|c| c.image_size == image_size)
            .copied()
    }

    #[inline]
    pub fn column_to_x(&self, column: f64) -> f64 {
        (column - self.x_offset) * self.x_scale
    }

    #[inline]
    pub fn row_to_y(&self, row: f64) -> f64 {
        (row - self.y_offset) * self.y_scale
    }

    #[inline]
    pub fn x_to_column(&self, x: f64) -> f64 {
        x / self.x_scale + self.x_offset
    }

    #[inline]
    pub fn y_to_row(&self, y: f64) -> f64 {
        y / self.y_scale + self.y_offset
    }

    /// Convert pixel coordinates (column, row) to scan angles (x, y).
    #[inline]
    pub fn to_scan_angle(&self, column: f64, row: f64) -> (f64, f64) {
        (self.column_to_x(column), self.row_to_y(row))
    }

    /// Convert scan angles (x, y) to pixel coordinates (column, row).
    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_to_column(x), self.y_to_row(y))
    }
}
