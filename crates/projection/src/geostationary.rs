//! Geostationary satellite projection.
//!
//! The satellite views Earth from a fixed position above the equator and
//! coordinates are expressed as scan angles in radians from nadir: `x` sweeps
//! east-west, `y` north-south. Earth is modelled as an oblate spheroid.
//!
//! Reference: GOES-R Product Definition and Users' Guide (PUG) Volume 4,
//! Section 4.2.8.

use sat_common::{normalise_radians, Angle, ProjectionError, Result, SatelliteDefinition};

/// GRS80 semi-major axis (metres).
pub const EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// GRS80 semi-minor axis (metres).
pub const POLAR_RADIUS: f64 = 6_356_752.31414;

/// First eccentricity of the GRS80 ellipsoid.
pub const ECCENTRICITY: f64 = 0.0818191910435;

/// Scan angle pair in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanAngle {
    pub x: f64,
    pub y: f64,
}

/// Geodetic coordinate in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
}

impl Geodetic {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude.to_radians(), longitude.to_radians())
    }

    /// (latitude, longitude) in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.latitude.to_degrees(), self.longitude.to_degrees())
    }
}

/// Terms of the forward transform that depend only on latitude.
///
/// Built once per output row when resampling into an equirectangular grid,
/// where every pixel in a row shares the same latitude.
#[derive(Debug, Clone, Copy)]
pub struct LatitudeCalculations {
    pub latitude: f64,
    /// rc · cos(geocentric latitude)
    rc_cos_lat: f64,
    /// rc · sin(geocentric latitude)
    sz: f64,
    /// (req² / rpol²) · sz²
    sz_term: f64,
}

/// Terms of the reverse transform that depend only on the vertical scan angle.
#[derive(Debug, Clone, Copy)]
pub struct VerticalScanningCalculations {
    pub y: f64,
    cos_y: f64,
    sin_y: f64,
    /// cos²y + (req² / rpol²) · sin²y
    t: f64,
}

/// Geostationary projection parameters.
#[derive(Debug, Clone)]
pub struct Geostationary {
    /// Satellite distance from Earth centre (metres).
    /// This is perspective_point_height + semi_major_axis.
    pub h: f64,
    /// Satellite altitude above the equatorial surface (metres).
    pub perspective_point_height: f64,
    /// Semi-major axis of the Earth ellipsoid (metres).
    pub req: f64,
    /// Semi-minor axis of the Earth ellipsoid (metres).
    pub rpol: f64,
    /// Longitude of the satellite nadir point (radians).
    pub lambda_0: f64,
    req_rpol_sq: f64,
    rpol_req_sq: f64,
    e2: f64,
    /// H² - req², constant term of the slant range quadratic.
    c: f64,
}

impl Geostationary {
    fn build(perspective_point_height: f64, req: f64, rpol: f64, lambda_0: f64) -> Self {
        let h = perspective_point_height + req;
        Self {
            h,
            perspective_point_height,
            req,
            rpol,
            lambda_0,
            req_rpol_sq: (req / rpol).powi(2),
            rpol_req_sq: (rpol / req).powi(2),
            e2: ECCENTRICITY * ECCENTRICITY,
            c: h * h - req * req,
        }
    }

    /// Create the projection for a satellite definition.
    ///
    /// Fails if the geometry would produce NaN instead of scan angles.
    pub fn new(satellite: &SatelliteDefinition) -> Result<Self> {
        satellite.validate()?;
        Ok(Self::build(
            satellite.height,
            EQUATORIAL_RADIUS,
            POLAR_RADIUS,
            satellite.longitude.radians(),
        ))
    }

    /// Create a projection from GOES NetCDF style parameters.
    ///
    /// # Arguments
    /// * `perspective_point_height` - Satellite altitude above Earth surface (metres)
    /// * `longitude_origin_deg` - Satellite longitude (degrees, negative for west)
    pub fn from_goes(perspective_point_height: f64, longitude_origin_deg: f64) -> Result<Self> {
        let satellite = SatelliteDefinition::new(
            "custom",
            Angle::from_degrees(longitude_origin_deg),
            perspective_point_height,
        );
        Self::new(&satellite)
    }

    /// GOES-16 (GOES-East at 75.2°W).
    pub fn goes16() -> Self {
        Self::build(35_786_023.0, EQUATORIAL_RADIUS, POLAR_RADIUS, (-75.2f64).to_radians())
    }

    /// GOES-17 (GOES-West at 137.2°W).
    pub fn goes17() -> Self {
        Self::build(35_786_023.0, EQUATORIAL_RADIUS, POLAR_RADIUS, (-137.2f64).to_radians())
    }

    /// Himawari-8 (140.7°E).
    pub fn himawari8() -> Self {
        Self::build(35_785_831.0, EQUATORIAL_RADIUS, POLAR_RADIUS, 140.7f64.to_radians())
    }

    /// The sub-satellite point.
    pub fn nadir(&self) -> Geodetic {
        Geodetic::new(0.0, normalise_radians(self.lambda_0))
    }

    /// Precompute the latitude-only terms of the forward transform.
    pub fn latitude_calculations(&self, latitude: f64) -> LatitudeCalculations {
        // Geocentric latitude (accounting for Earth's oblateness)
        let phi_c = (self.rpol_req_sq * latitude.tan()).atan();
        let (sin_lat, cos_lat) = phi_c.sin_cos();

        // Radius from Earth centre to surface point
        let rc = self.rpol / (1.0 - self.e2 * cos_lat * cos_lat).sqrt();
        let sz = rc * sin_lat;

        LatitudeCalculations {
            latitude,
            rc_cos_lat: rc * cos_lat,
            sz,
            sz_term: self.req_rpol_sq * sz * sz,
        }
    }

    /// Precompute the row-only terms of the reverse transform.
    pub fn vertical_scan(&self, y: f64) -> VerticalScanningCalculations {
        let (sin_y, cos_y) = y.sin_cos();
        VerticalScanningCalculations {
            y,
            cos_y,
            sin_y,
            t: cos_y * cos_y + self.req_rpol_sq * sin_y * sin_y,
        }
    }

    /// Convert geodetic coordinates (radians) to scan angles (radians).
    ///
    /// Returns None if the point is on the far side of the Earth. The
    /// visibility test (PUG 4.2.8) admits a sliver of about 0.2° past the true
    /// horizon; scan angles there do not map back to the same point.
    pub fn to_scanning_angle(&self, latitude: f64, longitude: f64) -> Option<ScanAngle> {
        self.to_scanning_angle_with(&self.latitude_calculations(latitude), longitude)
    }

    /// Forward transform reusing precomputed latitude terms.
    #[inline]
    pub fn to_scanning_angle_with(
        &self,
        lat: &LatitudeCalculations,
        longitude: f64,
    ) -> Option<ScanAngle> {
        let (sin_dlon, cos_dlon) = (longitude - self.lambda_0).sin_cos();

        // Satellite-centred, Earth-fixed vector to the surface point
        let sx = self.h - lat.rc_cos_lat * cos_dlon;
        let sy = -lat.rc_cos_lat * sin_dlon;
        let sz = lat.sz;

        if self.h * (self.h - sx) < sy * sy + lat.sz_term {
            return None;
        }

        let range = (sx * sx + sy * sy + sz * sz).sqrt();
        Some(ScanAngle {
            x: (-sy / range).asin(),
            y: (sz / sx).atan(),
        })
    }

    /// Convert scan angles (radians) to geodetic coordinates (radians).
    ///
    /// Returns None if the scan angle points to space.
    pub fn to_geodetic(&self, x: f64, y: f64) -> Option<Geodetic> {
        self.to_geodetic_with(&self.vertical_scan(y), x)
    }

    /// Reverse transform reusing precomputed vertical scan terms.
    #[inline]
    pub fn to_geodetic_with(&self, row: &VerticalScanningCalculations, x: f64) -> Option<Geodetic> {
        let (sin_x, cos_x) = x.sin_cos();

        // Quadratic coefficients for the distance to the Earth's surface
        let a = sin_x * sin_x + cos_x * cos_x * row.t;
        let b = -2.0 * self.h * cos_x * row.cos_y;

        let discriminant = b * b - 4.0 * a * self.c;
        if discriminant < 0.0 {
            return None;
        }

        let rs = (-b - discriminant.sqrt()) / (2.0 * a);

        let sx = rs * cos_x * row.cos_y;
        let sy = -rs * sin_x;
        let sz = rs * cos_x * row.sin_y;

        let latitude = (self.req_rpol_sq * sz / (self.h - sx).hypot(sy)).atan();
        let longitude = normalise_radians(self.lambda_0 - sy.atan2(self.h - sx));

        Some(Geodetic {
            latitude,
            longitude,
        })
    }

    /// Check whether a geodetic point (radians) faces the satellite.
    pub fn is_visible(&self, latitude: f64, longitude: f64) -> bool {
        self.to_scanning_angle(latitude, longitude).is_some()
    }
}
