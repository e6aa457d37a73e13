//! Equirectangular (plate carrée) target and source grids.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use sat_common::{normalise_radians, ProjectionError, Range, Result};

/// A regular latitude/longitude pixel grid.
///
/// Pixel centres sit half a step inside the bounds. Row 0 is the northern
/// edge. Longitudes are measured eastward from `longitude.start`, so a
/// `longitude` range that crosses the ±180° seam is fine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquirectangularGrid {
    /// Western and eastern edges (radians).
    pub longitude: Range,
    /// Southern and northern edges (radians).
    pub latitude: Range,
    pub width: u32,
    pub height: u32,
}

impl EquirectangularGrid {
    /// Create a grid covering the given bounds.
    pub fn new(longitude: Range, latitude: Range, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ProjectionError::invalid_image(format!(
                "grid dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        if !longitude.start.is_finite() || !longitude.end.is_finite() || longitude.width() <= 0.0 {
            return Err(ProjectionError::invalid_image(format!(
                "grid longitude range {} is empty",
                longitude
            )));
        }

        if !(latitude.start < latitude.end)
            || latitude.start < -FRAC_PI_2 - 1e-9
            || latitude.end > FRAC_PI_2 + 1e-9
        {
            return Err(ProjectionError::invalid_image(format!(
                "grid latitude range {} must be south-to-north within ±90°",
                latitude
            )));
        }

        Ok(Self {
            longitude,
            latitude,
            width,
            height,
        })
    }

    /// Full-globe grid from -180° to 180° and -90° to 90°.
    pub fn global(width: u32, height: u32) -> Self {
        Self {
            longitude: Range::new(-PI, PI),
            latitude: Range::new(-FRAC_PI_2, FRAC_PI_2),
            width,
            height,
        }
    }

    /// True if the grid spans every longitude, so columns wrap at the edges.
    pub fn is_global(&self) -> bool {
        self.longitude.width() >= TAU - 1e-9
    }

    /// Radians per column.
    #[inline]
    pub fn longitude_step(&self) -> f64 {
        self.longitude.width() / self.width as f64
    }

    /// Radians per row.
    #[inline]
    pub fn latitude_step(&self) -> f64 {
        (self.latitude.end - self.latitude.start) / self.height as f64
    }

    /// Longitude of a column's centre, normalised into (-π, π].
    #[inline]
    pub fn longitude_at(&self, column: u32) -> f64 {
        normalise_radians(self.longitude.start + (column as f64 + 0.5) * self.longitude_step())
    }

    /// Latitude of a row's centre.
    #[inline]
    pub fn latitude_at(&self, row: u32) -> f64 {
        self.latitude.end - (row as f64 + 0.5) * self.latitude_step()
    }

    /// Fractional (column, row) of a geodetic point, with integer values at
    /// pixel centres.
    ///
    /// Columns on a global grid are taken modulo the full turn. On a regional
    /// grid the column is measured from the nearest edge, so points west of
    /// the grid come out negative.
    #[inline]
    pub fn to_pixel(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let eastward = if self.is_global() {
            (longitude - self.longitude.start).rem_euclid(TAU)
        } else {
            normalise_radians(longitude - self.longitude.centre()) + self.longitude.width() / 2.0
        };

        let column = eastward / self.longitude_step() - 0.5;
        let row = (self.latitude.end - latitude) / self.latitude_step() - 0.5;
        (column, row)
    }

    /// Half-open column spans whose centres fall inside `band`.
    ///
    /// Used to crop a reprojected image to a satellite's non-overlapping
    /// longitudes. A band crossing the seam of a global grid yields two spans.
    pub fn column_spans(&self, band: &Range) -> Vec<(u32, u32)> {
        let mut spans = Vec::new();
        let mut open: Option<u32> = None;

        for column in 0..self.width {
            let inside = band.contains(self.longitude_at(column));
            match (inside, open) {
                (true, None) => open = Some(column),
                (false, Some(start)) => {
                    spans.push((start, column));
                    open = None;
                }
                _ => {}
            }
        }

        if let Some(start) = open {
            spans.push((start, self.width));
        }

        spans
    }
}
