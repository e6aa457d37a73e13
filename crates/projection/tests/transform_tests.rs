//! Forward and reverse transform properties.

use projection::{Geostationary, ScanCalibration};
use sat_common::normalise_radians;
use test_utils::{assert_approx_eq, assert_coords_approx_eq, satellites, textbook};

fn projections() -> Vec<(&'static str, Geostationary)> {
    vec![
        ("goes16", Geostationary::new(&satellites::goes16()).unwrap()),
        ("goes17", Geostationary::new(&satellites::goes17()).unwrap()),
        ("himawari8", Geostationary::new(&satellites::himawari8()).unwrap()),
    ]
}

/// Geodetic points within 75° of nadir, in radians.
fn disc_samples(projection: &Geostationary) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let limit = 75f64.to_radians().cos();

    for lat in (-70..=70).step_by(5) {
        for dlon in (-75..=75).step_by(5) {
            let lat = (lat as f64).to_radians();
            let dlon = (dlon as f64).to_radians();
            if lat.cos() * dlon.cos() > limit {
                points.push((lat, normalise_radians(projection.lambda_0 + dlon)));
            }
        }
    }

    points
}

#[test]
fn test_textbook_fixture() {
    let projection =
        Geostationary::from_goes(textbook::PERSPECTIVE_POINT_HEIGHT, textbook::SATELLITE_LONGITUDE)
            .unwrap();

    let scan = projection
        .to_scanning_angle(textbook::LATITUDE.to_radians(), textbook::LONGITUDE.to_radians())
        .unwrap();

    assert_coords_approx_eq!((scan.x, scan.y), (textbook::X, textbook::Y), 1e-6);
}

#[test]
fn test_geodetic_roundtrip() {
    for (name, projection) in projections() {
        let samples = disc_samples(&projection);
        assert!(samples.len() > 100, "{} has too few samples", name);

        for (lat, lon) in samples {
            let scan = projection
                .to_scanning_angle(lat, lon)
                .unwrap_or_else(|| panic!("{}: ({}, {}) should be visible", name, lat, lon));
            let back = projection
                .to_geodetic(scan.x, scan.y)
                .unwrap_or_else(|| panic!("{}: scan {:?} should intersect", name, scan));

            assert_approx_eq!(back.latitude, lat, 1e-6);
            assert_approx_eq!(normalise_radians(back.longitude - lon), 0.0, 1e-6);
        }
    }
}

#[test]
fn test_scan_roundtrip() {
    let projection = Geostationary::goes16();

    for i in -14..=14 {
        for j in -14..=14 {
            let x = i as f64 * 0.01;
            let y = j as f64 * 0.01;

            if let Some(geodetic) = projection.to_geodetic(x, y) {
                let scan = projection
                    .to_scanning_angle(geodetic.latitude, geodetic.longitude)
                    .unwrap();
                assert_coords_approx_eq!((scan.x, scan.y), (x, y), 1e-6);
            }
        }
    }
}

#[test]
fn test_visibility_agrees_at_limb() {
    let projection = Geostationary::goes16();

    // Scan angles either side of the equatorial limb (asin(req / H) ≈ 0.15185)
    let inside = projection.to_geodetic(0.1515, 0.0);
    let outside = projection.to_geodetic(0.1522, 0.0);
    assert!(inside.is_some());
    assert!(outside.is_none());

    // The point just inside the limb is visible to the forward transform too
    let geodetic = inside.unwrap();
    assert!(projection.is_visible(geodetic.latitude, geodetic.longitude));

    // Ground points either side of the horizon (≈81.3° from nadir)
    let near = normalise_radians(projection.lambda_0 + 80.5f64.to_radians());
    let far = normalise_radians(projection.lambda_0 + 82.5f64.to_radians());
    assert!(projection.to_scanning_angle(0.0, near).is_some());
    assert!(projection.to_scanning_angle(0.0, far).is_none());

    // The scan angle of the near point intersects the ellipsoid
    let scan = projection.to_scanning_angle(0.0, near).unwrap();
    assert!(projection.to_geodetic(scan.x, scan.y).is_some());
}

#[test]
fn test_forward_visibility_sliver_past_horizon() {
    let projection = Geostationary::goes16();

    // 81.4° from nadir is past the geometric horizon (≈81.3°) but still
    // passes the forward visibility test
    let longitude = normalise_radians(projection.lambda_0 + 81.4f64.to_radians());
    let scan = projection.to_scanning_angle(0.0, longitude).unwrap();

    // The ray hits the nearer limb instead, so the round trip falls short
    let back = projection.to_geodetic(scan.x, scan.y).unwrap();
    let error = normalise_radians(longitude - back.longitude).to_degrees().abs();
    assert!(error > 0.05 && error < 0.5, "error = {}", error);
}

#[test]
fn test_outputs_are_paired() {
    let projection = Geostationary::himawari8();

    for lat in (-90..=90).step_by(10) {
        for lon in (-180..180).step_by(10) {
            if let Some(scan) =
                projection.to_scanning_angle((lat as f64).to_radians(), (lon as f64).to_radians())
            {
                assert!(scan.x.is_finite() && scan.y.is_finite());
            }
        }
    }
}

#[test]
fn test_calibrated_pixel_roundtrip() {
    let projection = Geostationary::goes16();
    let calibration = ScanCalibration::KM_2;

    for (column, row) in [(2712.0, 2711.0), (1000.0, 1500.0), (4000.0, 3000.0)] {
        let (x, y) = calibration.to_scan_angle(column, row);
        let geodetic = projection.to_geodetic(x, y).unwrap();
        let scan = projection
            .to_scanning_angle(geodetic.latitude, geodetic.longitude)
            .unwrap();
        let (c, r) = calibration.to_pixel(scan.x, scan.y);

        assert_coords_approx_eq!((c, r), (column, row), 1e-3);
    }
}
