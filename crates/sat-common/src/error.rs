//! Error types for the reprojection crates.
//!
//! Points that fall outside a satellite's view are not errors; the
//! transforms report them as `None`. These variants cover malformed inputs
//! that would otherwise leak NaN into the output.

use thiserror::Error;

/// Result type alias using ProjectionError.
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised by the projection and resampling engine.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid geometry for satellite '{satellite}': {reason}")]
    InvalidGeometry { satellite: String, reason: String },

    #[error("no visible longitude found for satellite '{satellite}'")]
    NoVisibleLongitude { satellite: String },

    #[error("invalid scan calibration: {0}")]
    InvalidCalibration(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl ProjectionError {
    /// Create an InvalidGeometry error.
    pub fn invalid_geometry(satellite: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            satellite: satellite.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidImage error.
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }
}

/// Errors raised while loading the satellite registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse registry: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate satellite id '{0}'")]
    DuplicateId(String),

    #[error(transparent)]
    Invalid(#[from] ProjectionError),
}
