//! Common types shared across the geostationary reprojection crates.
//!
//! Angles are always carried in radians internally; degrees only appear at
//! the configuration and display boundaries.

pub mod angle;
pub mod error;
pub mod range;
pub mod registry;
pub mod satellite;

pub use angle::{normalise_radians, Angle};
pub use error::{ProjectionError, RegistryError, Result};
pub use range::{ProjectionRange, Range};
pub use registry::{RangeConfig, SatelliteConfig, SatelliteRegistry};
pub use satellite::{SatelliteDefinition, DEFAULT_SATELLITE_HEIGHT};
