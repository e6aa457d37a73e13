//! Common test fixtures.

use sat_common::{Angle, Range, SatelliteDefinition, DEFAULT_SATELLITE_HEIGHT};

/// Well-known geostationary satellites.
pub mod satellites {
    use super::*;

    pub fn goes16() -> SatelliteDefinition {
        SatelliteDefinition::new("goes16", Angle::from_degrees(-75.2), DEFAULT_SATELLITE_HEIGHT)
            .with_display_name("GOES-16")
    }

    pub fn goes17() -> SatelliteDefinition {
        SatelliteDefinition::new("goes17", Angle::from_degrees(-137.2), DEFAULT_SATELLITE_HEIGHT)
            .with_display_name("GOES-17")
    }

    pub fn himawari8() -> SatelliteDefinition {
        SatelliteDefinition::new("himawari8", Angle::from_degrees(140.7), 35_785_831.0)
            .with_display_name("Himawari-8")
    }

    /// A satellite with an explicit longitude range, in degrees.
    pub fn with_range(id: &str, longitude: f64, start: f64, end: f64) -> SatelliteDefinition {
        SatelliteDefinition::new(id, Angle::from_degrees(longitude), DEFAULT_SATELLITE_HEIGHT)
            .with_longitude_range(Range::from_degrees(start, end))
    }
}

/// Worked example from the GOES-R Product Users' Guide.
pub mod textbook {
    /// Satellite longitude used by the example (degrees).
    pub const SATELLITE_LONGITUDE: f64 = -75.0;
    /// Perspective point height (metres).
    pub const PERSPECTIVE_POINT_HEIGHT: f64 = 35_786_023.0;
    /// Geodetic latitude (degrees).
    pub const LATITUDE: f64 = 33.846162;
    /// Geodetic longitude (degrees).
    pub const LONGITUDE: f64 = -84.690932;
    /// Expected east-west scan angle (radians).
    pub const X: f64 = -0.024052;
    /// Expected north-south scan angle (radians).
    pub const Y: f64 = 0.095340;
}

/// Longitude ranges for overlap resolution, in degrees.
pub mod overlap {
    /// (id, nadir, start, end)
    pub type Entry = (&'static str, f64, f64, f64);

    pub const AMERICAS: Entry = ("americas", -70.0, -150.0, 10.0);
    pub const PACIFIC: Entry = ("pacific", -135.0, 140.0, -50.0);
    pub const EUROPE: Entry = ("europe", 30.0, 0.0, 60.0);
}
