//! Row-parallel resampling.

use std::time::Instant;

use image::RgbaImage;
use projection::ScanCalibration;
use rayon::prelude::*;
use rayon::ThreadPool;
use sat_common::{ProjectionError, Result, SatelliteDefinition};
use tracing::{debug, info};

use crate::config::ResamplerConfig;
use crate::grid::EquirectangularGrid;
use crate::interpolation::{sample, InterpolationMethod, TRANSPARENT};
use crate::transform::{
    EquirectangularToGeostationary, GeostationaryToEquirectangular, PixelTransform,
};

/// Fill one target row.
///
/// `out` holds the row's RGBA bytes. Target pixels without a source
/// counterpart are written as transparent.
pub fn resample_row<T: PixelTransform>(
    row: u32,
    out: &mut [u8],
    source: &RgbaImage,
    transform: &T,
    method: InterpolationMethod,
) {
    let cache = transform.row_cache(row);
    let wrap_x = transform.wraps_source();

    for (column, pixel) in out.chunks_exact_mut(4).enumerate() {
        let value = transform
            .source_pixel(&cache, column as u32)
            .and_then(|(x, y)| sample(source, x, y, method, wrap_x))
            .unwrap_or(TRANSPARENT);
        pixel.copy_from_slice(&value);
    }
}

/// Dedicated pool for `config.threads`, or `None` for the global rayon pool.
///
/// Build it once and pass it to [`resample_on`] when resampling a batch.
pub fn build_thread_pool(config: &ResamplerConfig) -> Result<Option<ThreadPool>> {
    config.validate().map_err(ProjectionError::ThreadPool)?;
    if config.threads == 0 {
        return Ok(None);
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map(Some)
        .map_err(|e| ProjectionError::ThreadPool(e.to_string()))
}

/// Resample `source` into a new `width` x `height` image.
///
/// Rows are processed in parallel. With `config.threads > 0` the work runs
/// on a dedicated pool of that size, otherwise on the global rayon pool.
pub fn resample<T: PixelTransform>(
    source: &RgbaImage,
    width: u32,
    height: u32,
    transform: &T,
    config: &ResamplerConfig,
) -> Result<RgbaImage> {
    let pool = build_thread_pool(config)?;
    resample_on(
        source,
        width,
        height,
        transform,
        config.interpolation,
        pool.as_ref(),
    )
}

/// [`resample`] on a caller-owned pool. `None` uses the global rayon pool.
pub fn resample_on<T: PixelTransform>(
    source: &RgbaImage,
    width: u32,
    height: u32,
    transform: &T,
    method: InterpolationMethod,
    pool: Option<&ThreadPool>,
) -> Result<RgbaImage> {
    if source.width() == 0 || source.height() == 0 {
        return Err(ProjectionError::invalid_image("source image is empty"));
    }
    if width == 0 || height == 0 {
        return Err(ProjectionError::invalid_image(format!(
            "target dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let start = Instant::now();
    let row_bytes = width as usize * 4;
    let mut buffer = vec![0u8; row_bytes * height as usize];

    let fill = |buffer: &mut [u8]| {
        buffer
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(row, out)| resample_row(row as u32, out, source, transform, method));
    };

    match pool {
        Some(pool) => pool.install(|| fill(&mut buffer)),
        None => fill(&mut buffer),
    }

    debug!(
        width = width,
        height = height,
        interpolation = %method,
        threads = pool.map_or(0, |p| p.current_num_threads()),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Resampled image"
    );

    RgbaImage::from_raw(width, height, buffer)
        .ok_or_else(|| ProjectionError::invalid_image("output buffer does not match dimensions"))
}

/// Reproject a full-disk image onto an equirectangular grid.
pub fn reproject_to_equirectangular(
    disc: &RgbaImage,
    satellite: &SatelliteDefinition,
    calibration: &ScanCalibration,
    grid: &EquirectangularGrid,
    config: &ResamplerConfig,
) -> Result<RgbaImage> {
    if disc.width() != calibration.image_size || disc.height() != calibration.image_size {
        return Err(ProjectionError::invalid_image(format!(
            "disc is {}x{} but calibration expects {}x{}",
            disc.width(),
            disc.height(),
            calibration.image_size,
            calibration.image_size
        )));
    }

    let transform = GeostationaryToEquirectangular::new(satellite, *calibration, *grid)?;

    info!(
        satellite = %satellite.id,
        source_size = calibration.image_size,
        width = grid.width,
        height = grid.height,
        "Reprojecting to equirectangular"
    );

    resample(disc, grid.width, grid.height, &transform, config)
}

/// Reproject an equirectangular image into a satellite's full-disk view.
pub fn reproject_to_geostationary(
    flat: &RgbaImage,
    satellite: &SatelliteDefinition,
    grid: &EquirectangularGrid,
    calibration: &ScanCalibration,
    config: &ResamplerConfig,
) -> Result<RgbaImage> {
    if flat.width() != grid.width || flat.height() != grid.height {
        return Err(ProjectionError::invalid_image(format!(
            "image is {}x{} but grid is {}x{}",
            flat.width(),
            flat.height(),
            grid.width,
            grid.height
        )));
    }

    let transform = EquirectangularToGeostationary::new(satellite, *grid, *calibration)?;

    info!(
        satellite = %satellite.id,
        width = grid.width,
        height = grid.height,
        target_size = calibration.image_size,
        "Reprojecting to geostationary"
    );

    resample(
        flat,
        calibration.image_size,
        calibration.image_size,
        &transform,
        config,
    )
}
