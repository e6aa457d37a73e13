//! Geostationary projection engine.
//!
//! Converts between geodetic coordinates and satellite scan angles, maps scan
//! angles to image pixels, discovers each satellite's visible longitude span
//! and splits overlapping coverage between neighbouring satellites.

pub mod calibration;
pub mod geostationary;
pub mod overlap;
pub mod visible_range;

pub use calibration::ScanCalibration;
pub use geostationary::{
    Geodetic, Geostationary, LatitudeCalculations, ScanAngle, VerticalScanningCalculations,
    ECCENTRICITY, EQUATORIAL_RADIUS, POLAR_RADIUS,
};
pub use overlap::{non_overlapping_range, resolve_overlaps, rotate_away_from_seam, SeamRotation};
pub use visible_range::{apply_visible_ranges, visible_longitude_range};
