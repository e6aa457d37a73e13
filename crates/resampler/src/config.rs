//! Configuration for the resampling engine.

use crate::interpolation::InterpolationMethod;
use serde::{Deserialize, Serialize};

/// Configuration for the resampling engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResamplerConfig {
    /// Interpolation method used when sampling the source image.
    pub interpolation: InterpolationMethod,

    /// Worker threads for row-parallel resampling.
    /// 0 uses the global rayon pool.
    pub threads: usize,
}

impl Default for ResamplerConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::Bilinear,
            threads: 0,
        }
    }
}

impl ResamplerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RESAMPLE_INTERPOLATION") {
            config.interpolation = InterpolationMethod::from_str(&val);
        }

        if let Ok(val) = std::env::var("RESAMPLE_THREADS") {
            if let Ok(threads) = val.parse() {
                config.threads = threads;
            }
        }

        config
    }

    pub fn with_interpolation(mut self, interpolation: InterpolationMethod) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.threads > 1024 {
            return Err(format!("resample threads must be <= 1024, got {}", self.threads));
        }

        Ok(())
    }
}
