//! Longitude and latitude intervals.
//!
//! A [`Range`] whose `start` is greater than its `end` spans the ±180°
//! seam: `[170°, -170°]` is the 20° band centred on the antimeridian.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::normalise_radians;

/// An interval of angles, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn from_degrees(start: f64, end: f64) -> Self {
        Self::new(start.to_radians(), end.to_radians())
    }

    /// True if the interval crosses the ±180° seam in its raw form.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Equivalent interval with `end >= start`, adding 2π to the end if needed.
    pub fn unwrap_longitude(&self) -> Self {
        if self.end < self.start {
            Self::new(self.start, self.end + TAU)
        } else {
            *self
        }
    }

    /// Both bounds mapped into (-π, π].
    pub fn normalise(&self) -> Self {
        Self::new(normalise_radians(self.start), normalise_radians(self.end))
    }

    /// Angular width of the unwrapped interval.
    pub fn width(&self) -> f64 {
        let unwrapped = self.unwrap_longitude();
        unwrapped.end - unwrapped.start
    }

    /// Midpoint of the unwrapped interval.
    pub fn centre(&self) -> f64 {
        let unwrapped = self.unwrap_longitude();
        (unwrapped.start + unwrapped.end) / 2.0
    }

    /// Both bounds shifted by `delta` radians, without normalising.
    pub fn offset(&self, delta: f64) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    /// Seam-aware membership test for a longitude in radians.
    pub fn contains(&self, longitude: f64) -> bool {
        let eastward = (longitude - self.start).rem_euclid(TAU);
        eastward <= self.width()
    }

    /// (start, end) in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.start.to_degrees(), self.end.to_degrees())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.to_degrees();
        let precision = f.precision().unwrap_or(2);
        write!(f, "[{:.*}°, {:.*}°]", precision, start, precision, end)
    }
}

/// A satellite's longitude band after overlap resolution.
///
/// The flags record which sides were clipped because a neighbouring
/// satellite covers the same longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRange {
    pub range: Range,
    pub overlapping_left: bool,
    pub overlapping_right: bool,
}

impl ProjectionRange {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            overlapping_left: false,
            overlapping_right: false,
        }
    }

    pub fn is_clipped(&self) -> bool {
        self.overlapping_left || self.overlapping_right
    }
}
