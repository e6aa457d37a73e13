//! Angle primitive.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Map a radian value into (-π, π].
#[inline]
pub fn normalise_radians(radians: f64) -> f64 {
    let mut value = radians % TAU;
    if value <= -PI {
        value += TAU;
    } else if value > PI {
        value -= TAU;
    }
    value
}

/// An angle stored in radians.
///
/// Immutable; arithmetic returns new values. Comparison is numeric on the
/// radian value, so `Angle::from_degrees(-180.0) < Angle::from_degrees(180.0)`
/// even though both denote the same meridian. Call [`Angle::normalise`] first
/// when that matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    #[inline]
    pub const fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Equivalent angle in (-π, π].
    #[inline]
    pub fn normalise(self) -> Self {
        Self(normalise_radians(self.0))
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Self(radians)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}
