//! Print visible and non-overlapping longitude ranges for a satellite registry.
//!
//! Usage:
//!   cargo run --bin satellite-ranges -- --registry config/satellites.yaml --image-size 5424
//!
//! Entries without a configured `longitude_range` get one from the visible
//! range search at the given full-disk image size.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use projection::{apply_visible_ranges, resolve_overlaps, ScanCalibration};
use sat_common::SatelliteRegistry;

#[derive(Parser, Debug)]
#[command(name = "satellite-ranges")]
#[command(about = "Resolve longitude coverage for geostationary satellites")]
struct Args {
    /// Satellite registry YAML file
    #[arg(long, env = "SATELLITE_REGISTRY", default_value = "config/satellites.yaml")]
    registry: PathBuf,

    /// Full-disk image width used to discover visible ranges
    #[arg(long, default_value = "5424")]
    image_size: u32,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print the resolved ranges as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    let calibration = ScanCalibration::for_image_size(args.image_size).ok_or_else(|| {
        anyhow!(
            "unsupported image size {}; expected one of {:?}",
            args.image_size,
            ScanCalibration::PRESETS.map(|c| c.image_size)
        )
    })?;

    let mut registry = SatelliteRegistry::load(&args.registry)
        .with_context(|| format!("loading registry {}", args.registry.display()))?;

    let discovered = apply_visible_ranges(&mut registry, &calibration)
        .context("discovering visible longitude ranges")?;
    info!(discovered, image_size = args.image_size, "Visible ranges ready");

    let resolved = resolve_overlaps(registry.satellites());

    if args.json {
        let report: Vec<_> = registry
            .iter()
            .zip(&resolved)
            .map(|(satellite, projection)| {
                let (visible_start, visible_end) = satellite.longitude_range.to_degrees();
                let (start, end) = projection.range.to_degrees();
                json!({
                    "id": satellite.id,
                    "longitude": satellite.longitude.degrees(),
                    "visible": [visible_start, visible_end],
                    "assigned": [start, end],
                    "overlapping_left": projection.overlapping_left,
                    "overlapping_right": projection.overlapping_right,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{:<12} {:>9}  {:<22} {:<22} {}",
        "id", "longitude", "visible", "assigned", "overlap"
    );
    for (satellite, projection) in registry.iter().zip(&resolved) {
        let overlap = match (projection.overlapping_left, projection.overlapping_right) {
            (true, true) => "both",
            (true, false) => "left",
            (false, true) => "right",
            (false, false) => "-",
        };
        println!(
            "{:<12} {:>9.2}  {:<22} {:<22} {}",
            satellite.id,
            satellite.longitude.degrees(),
            satellite.longitude_range.to_string(),
            projection.range.to_string(),
            overlap
        );
    }

    Ok(())
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
