//! Satellite geometry consumed by the projection engine.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::error::{ProjectionError, Result};
use crate::range::Range;

/// Nominal geostationary altitude above the equatorial surface, in metres.
pub const DEFAULT_SATELLITE_HEIGHT: f64 = 35_786_023.0;

/// Geometry of one geostationary satellite.
///
/// `height` is measured from the equatorial surface; the projection adds
/// the Earth's equatorial radius to get the distance from the Earth's centre.
/// The ranges describe the nominal visible footprint in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteDefinition {
    pub id: String,
    pub display_name: String,
    pub longitude: Angle,
    pub height: f64,
    pub latitude_range: Range,
    pub longitude_range: Range,
}

impl SatelliteDefinition {
    /// Create a definition with a default footprint of ±81° around nadir.
    ///
    /// The footprint is replaced by the visible range resolver once the
    /// image size is known.
    pub fn new(id: impl Into<String>, longitude: Angle, height: f64) -> Self {
        let id = id.into();
        let span = 81f64.to_radians();
        Self {
            display_name: id.clone(),
            id,
            longitude,
            height,
            latitude_range: Range::new(-span, span),
            longitude_range: Range::new(longitude.radians() - span, longitude.radians() + span)
                .normalise(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_longitude_range(mut self, range: Range) -> Self {
        self.longitude_range = range;
        self
    }

    pub fn with_latitude_range(mut self, range: Range) -> Self {
        self.latitude_range = range;
        self
    }

    /// Reject geometry that would make the transforms produce NaN.
    pub fn validate(&self) -> Result<()> {
        let longitude = self.longitude.degrees();
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ProjectionError::invalid_geometry(
                &self.id,
                format!("longitude {} is outside [-180, 180]", longitude),
            ));
        }

        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ProjectionError::invalid_geometry(
                &self.id,
                format!("height must be positive, got {}", self.height),
            ));
        }

        for (name, range) in [
            ("latitude_range", &self.latitude_range),
            ("longitude_range", &self.longitude_range),
        ] {
            if !range.start.is_finite() || !range.end.is_finite() {
                return Err(ProjectionError::invalid_geometry(
                    &self.id,
                    format!("{} has non-finite bounds", name),
                ));
            }
        }

        Ok(())
    }
}
