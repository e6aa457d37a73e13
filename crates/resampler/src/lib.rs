//! Resampling between geostationary and equirectangular imagery.
//!
//! ```text
//! target row ──► PixelTransform::row_cache (once per row)
//!      │
//!      ├─► for each column: PixelTransform::source_pixel
//!      │         │
//!      │         ├─► None: transparent
//!      │         │
//!      │         └─► Some(x, y): nearest / bilinear sample
//!      │
//!      └─► rows run in parallel on the rayon pool
//! ```
//!
//! # Example
//!
//! ```ignore
//! use projection::ScanCalibration;
//! use resampler::{reproject_to_equirectangular, EquirectangularGrid, ResamplerConfig};
//!
//! let grid = EquirectangularGrid::global(4096, 2048);
//! let flat = reproject_to_equirectangular(
//!     &disc, &satellite, &ScanCalibration::KM_2, &grid, &ResamplerConfig::default(),
//! )?;
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod interpolation;
pub mod transform;

pub use config::ResamplerConfig;
pub use engine::{
    build_thread_pool, reproject_to_equirectangular, reproject_to_geostationary, resample,
    resample_on, resample_row,
};
pub use grid::EquirectangularGrid;
pub use interpolation::{sample, sample_bilinear, sample_nearest, InterpolationMethod, TRANSPARENT};
pub use transform::{EquirectangularToGeostationary, GeostationaryToEquirectangular, PixelTransform};
