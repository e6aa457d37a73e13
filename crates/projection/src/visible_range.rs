//! Discovery of the longitude span actually visible in a satellite image.
//!
//! The disc edge is where the reverse transform stops finding an
//! intersection, which has no closed form once the image is cropped to a
//! calibration. Walk the centre row inward from each edge instead.

use sat_common::{ProjectionError, Range, Result, SatelliteDefinition, SatelliteRegistry};
use tracing::{debug, info};

use crate::calibration::ScanCalibration;
use crate::geostationary::{Geostationary, VerticalScanningCalculations};

/// Minimum and maximum longitude visible along the image's centre row.
///
/// The result may wrap (`start > end`) for satellites whose view crosses
/// the antimeridian.
pub fn visible_longitude_range(
    satellite: &SatelliteDefinition,
    image_size: u32,
    calibration: &ScanCalibration,
) -> Result<Range> {
    let projection = Geostationary::new(satellite)?;
    let row = projection.vertical_scan(calibration.row_to_y((image_size / 2) as f64));

    let min = first_visible(&projection, &row, calibration, 0..image_size);
    let max = first_visible(&projection, &row, calibration, (0..image_size).rev());

    match (min, max) {
        (Some(min), Some(max)) => {
            let range = Range::new(min, max);
            debug!(
                satellite = %satellite.id,
                image_size,
                range = %range,
                "Resolved visible longitude range"
            );
            Ok(range)
        }
        _ => Err(ProjectionError::NoVisibleLongitude {
            satellite: satellite.id.clone(),
        }),
    }
}

/// Longitude of the first column in `columns` that intersects the Earth.
fn first_visible(
    projection: &Geostationary,
    row: &VerticalScanningCalculations,
    calibration: &ScanCalibration,
    mut columns: impl Iterator<Item = u32>,
) -> Option<f64> {
    columns.find_map(|column| {
        projection
            .to_geodetic_with(row, calibration.column_to_x(column as f64))
            .map(|geodetic| geodetic.longitude)
    })
}

/// Fill in the longitude range of every registry entry that did not
/// configure one. Returns how many entries were updated.
pub fn apply_visible_ranges(
    registry: &mut SatelliteRegistry,
    calibration: &ScanCalibration,
) -> Result<usize> {
    let pending: Vec<SatelliteDefinition> = registry
        .iter()
        .filter(|s| registry.needs_visible_range(&s.id))
        .cloned()
        .collect();

    for satellite in &pending {
        let range = visible_longitude_range(satellite, calibration.image_size, calibration)?;
        registry.set_longitude_range(&satellite.id, range);
    }

    if !pending.is_empty() {
        info!(
            count = pending.len(),
            image_size = calibration.image_size,
            "Applied visible longitude ranges"
        );
    }

    Ok(pending.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sat_common::{Angle, DEFAULT_SATELLITE_HEIGHT};

    fn satellite(id: &str, longitude: f64) -> SatelliteDefinition {
        SatelliteDefinition::new(id, Angle::from_degrees(longitude), DEFAULT_SATELLITE_HEIGHT)
    }

    #[test]
    fn test_goes16_full_disk() {
        let goes = satellite("goes16", -75.2);
        let range = visible_longitude_range(&goes, 5424, &ScanCalibration::KM_2).unwrap();
        let (min, max) = range.to_degrees();

        assert!(!range.wraps());
        assert!(min > -160.0 && min < -148.0, "min = {}", min);
        assert!(max > -2.0 && max < 10.0, "max = {}", max);
        // Symmetric about nadir
        assert!(((min + max) / 2.0 - (-75.2)).abs() < 0.5);
    }

    #[test]
    fn test_pacific_satellite_wraps() {
        let himawari = satellite("himawari8", 140.7);
        let range = visible_longitude_range(&himawari, 5424, &ScanCalibration::KM_2).unwrap();
        assert!(range.wraps(), "expected wrap, got {}", range);
        assert!(range.contains(180f64.to_radians()));
    }

    #[test]
    fn test_search_skips_space_columns() {
        // Wider than the disc: the edge columns look into space
        let calibration = ScanCalibration::centred(400, 0.001).unwrap();
        let goes = satellite("goes16", -75.2);

        let range = visible_longitude_range(&goes, 400, &calibration).unwrap();
        let (min, max) = range.to_degrees();
        assert!(min > -160.0 && min < -148.0, "min = {}", min);
        assert!(max > -2.0 && max < 10.0, "max = {}", max);
        assert!(calibration.to_scan_angle(0.0, 200.0).0 < -0.19);
    }

    #[test]
    fn test_no_visible_longitude() {
        // Every column points past the limb
        let calibration = ScanCalibration::new(10, 0.001, -500.0, -0.001, 5.0).unwrap();
        let goes = satellite("goes16", -75.2);

        let err = visible_longitude_range(&goes, 10, &calibration).unwrap_err();
        assert!(matches!(err, ProjectionError::NoVisibleLongitude { .. }));
    }

    #[test]
    fn test_rejects_invalid_geometry() {
        let broken = SatelliteDefinition::new("broken", Angle::from_degrees(0.0), -1.0);
        assert!(visible_longitude_range(&broken, 5424, &ScanCalibration::KM_2).is_err());
    }

    #[test]
    fn test_apply_visible_ranges() {
        let mut registry = SatelliteRegistry::from_yaml_str(
            "satellites:\n  - id: goes16\n    longitude: -75.2\n  - id: fixed\n    longitude: 0.0\n    longitude_range: { start: -10.0, end: 10.0 }\n",
        )
        .unwrap();

        let updated = apply_visible_ranges(&mut registry, &ScanCalibration::KM_4).unwrap();
        assert_eq!(updated, 1);
        assert!(!registry.needs_visible_range("goes16"));

        let fixed = registry.get("fixed").unwrap();
        let (start, end) = fixed.longitude_range.to_degrees();
        assert!((start + 10.0).abs() < 1e-9 && (end - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_visible_ranges_to_built_registry() {
        let placeholder = satellite("goes16", -75.2);
        let before = placeholder.longitude_range;
        let mut registry = SatelliteRegistry::from_definitions(
            vec![placeholder, satellite("himawari8", 140.7)],
            ["goes16"],
        )
        .unwrap();

        let updated = apply_visible_ranges(&mut registry, &ScanCalibration::KM_4).unwrap();
        assert_eq!(updated, 1);
        assert!(!registry.needs_visible_range("goes16"));
        assert_ne!(registry.get("goes16").unwrap().longitude_range, before);

        // Not listed as unresolved, so the placeholder footprint stays
        let himawari = registry.get("himawari8").unwrap();
        assert_eq!(himawari.longitude_range, satellite("himawari8", 140.7).longitude_range);
    }
}
