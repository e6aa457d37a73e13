//! Pixel mappings from a target image back into its source image.
//!
//! Resampling walks the target grid and asks, for every pixel, where it
//! came from. Each direction has terms that stay fixed along a target row
//! (latitude for an equirectangular target, the vertical scan angle for a
//! geostationary one). These are computed once per row and passed back in
//! as the row cache, which stays local to the worker handling that row.

use projection::{
    Geostationary, LatitudeCalculations, ScanCalibration, VerticalScanningCalculations,
};
use sat_common::{Result, SatelliteDefinition};

use crate::grid::EquirectangularGrid;

/// Maps target pixels to fractional source pixel coordinates.
pub trait PixelTransform: Sync {
    /// Terms shared by every pixel of one target row.
    type RowCache;

    fn row_cache(&self, row: u32) -> Self::RowCache;

    /// Source (column, row) for a target column, or `None` if the target
    /// pixel has no counterpart in the source (off the disc, or in space).
    fn source_pixel(&self, row: &Self::RowCache, column: u32) -> Option<(f64, f64)>;

    /// True if the source image is horizontally periodic.
    fn wraps_source(&self) -> bool {
        false
    }
}

/// Full-disk geostationary source to an equirectangular target.
#[derive(Debug, Clone)]
pub struct GeostationaryToEquirectangular {
    pub projection: Geostationary,
    /// Calibration of the source disc.
    pub calibration: ScanCalibration,
    /// Target grid.
    pub grid: EquirectangularGrid,
}

impl GeostationaryToEquirectangular {
    pub fn new(
        satellite: &SatelliteDefinition,
        calibration: ScanCalibration,
        grid: EquirectangularGrid,
    ) -> Result<Self> {
        Ok(Self {
            projection: Geostationary::new(satellite)?,
            calibration,
            grid,
        })
    }
}

impl PixelTransform for GeostationaryToEquirectangular {
    type RowCache = LatitudeCalculations;

    #[inline]
    fn row_cache(&self, row: u32) -> LatitudeCalculations {
        self.projection
            .latitude_calculations(self.grid.latitude_at(row))
    }

    #[inline]
    fn source_pixel(&self, row: &LatitudeCalculations, column: u32) -> Option<(f64, f64)> {
        let longitude = self.grid.longitude_at(column);
        let scan = self.projection.to_scanning_angle_with(row, longitude)?;
        Some(self.calibration.to_pixel(scan.x, scan.y))
    }
}

/// Equirectangular source to a full-disk geostationary target.
#[derive(Debug, Clone)]
pub struct EquirectangularToGeostationary {
    pub projection: Geostationary,
    /// Source grid.
    pub grid: EquirectangularGrid,
    /// Calibration of the target disc.
    pub calibration: ScanCalibration,
}

impl EquirectangularToGeostationary {
    pub fn new(
        satellite: &SatelliteDefinition,
        grid: EquirectangularGrid,
        calibration: ScanCalibration,
    ) -> Result<Self> {
        Ok(Self {
            projection: Geostationary::new(satellite)?,
            grid,
            calibration,
        })
    }
}

impl PixelTransform for EquirectangularToGeostationary {
    type RowCache = VerticalScanningCalculations;

    #[inline]
    fn row_cache(&self, row: u32) -> VerticalScanningCalculations {
        self.projection
            .vertical_scan(self.calibration.row_to_y(row as f64))
    }

    #[inline]
    fn source_pixel(&self, row: &VerticalScanningCalculations, column: u32) -> Option<(f64, f64)> {
        let x = self.calibration.column_to_x(column as f64);
        let geodetic = self.projection.to_geodetic_with(row, x)?;
        Some(self.grid.to_pixel(geodetic.latitude, geodetic.longitude))
    }

    fn wraps_source(&self) -> bool {
        self.grid.is_global()
    }
}
