//! Partitioning of overlapping satellite coverage.
//!
//! Where two satellites see the same longitudes, each keeps the half of
//! the shared band nearest to itself: the split is at the midpoint of the
//! overlap.
//!
//! # Limitation
//!
//! Each comparison is pairwise. When more than one other satellite
//! overlaps the same side of a target, the tightest clip wins, which is
//! only a correct split if the neighbours do not also overlap each other.
//! The stitching stage relies on exactly this behaviour.

use std::f64::consts::TAU;

use sat_common::{ProjectionRange, Range, SatelliteDefinition};
use tracing::debug;

/// Two ranges rotated so that neither crosses the ±180° seam.
#[derive(Debug, Clone, PartialEq)]
pub struct SeamRotation {
    /// Radians added to both ranges. Subtract to return to the unrotated frame.
    pub offset: f64,
    /// The unwrapped target, centred on zero.
    pub target: Range,
    /// The other range in the rotated frame.
    ///
    /// One entry if it lies inside (-π, π]; two if it still straddles the
    /// seam, placed on either side of the target.
    pub placements: Vec<Range>,
}

/// Rotate `target` onto zero longitude and bring `other` along with it.
///
/// Once the target is centred it cannot cross the seam, so plain interval
/// comparisons work on the rotated ranges.
pub fn rotate_away_from_seam(target: &Range, other: &Range) -> SeamRotation {
    let unwrapped = target.unwrap_longitude();
    let offset = -unwrapped.centre();
    let rotated = other.offset(offset).normalise();

    let placements = if rotated.wraps() {
        vec![
            Range::new(rotated.start - TAU, rotated.end),
            Range::new(rotated.start, rotated.end + TAU),
        ]
    } else {
        vec![rotated]
    };

    SeamRotation {
        offset,
        target: unwrapped.offset(offset),
        placements,
    }
}

/// Longitude band of `target` after splitting overlaps with every other
/// satellite in `satellites`.
///
/// Satellites are matched to `target` by id. The returned range is
/// unwrapped: `end >= start`, and `end` may exceed π.
pub fn non_overlapping_range(
    target: &SatelliteDefinition,
    satellites: &[SatelliteDefinition],
) -> ProjectionRange {
    let range = target.longitude_range.unwrap_longitude();

    let mut min = range.start;
    let mut max = range.end;
    let mut overlapping_left = false;
    let mut overlapping_right = false;

    for other in satellites.iter().filter(|s| s.id != target.id) {
        let rotation = rotate_away_from_seam(&range, &other.longitude_range);
        let own = rotation.target;

        for placement in &rotation.placements {
            // Other satellite encroaches from the east
            if own.start < placement.start && own.end > placement.start {
                let midpoint = (own.end - placement.start) / 2.0 + placement.start;
                max = max.min(midpoint - rotation.offset);
                overlapping_right = true;
            }

            // Other satellite encroaches from the west
            if own.end > placement.end && own.start < placement.end {
                let midpoint = (placement.end - own.start) / 2.0 + own.start;
                min = min.max(midpoint - rotation.offset);
                overlapping_left = true;
            }
        }
    }

    let resolved = ProjectionRange {
        range: Range::new(min, max),
        overlapping_left,
        overlapping_right,
    };

    debug!(
        satellite = %target.id,
        visible = %target.longitude_range,
        resolved = %resolved.range,
        overlapping_left,
        overlapping_right,
        "Resolved non-overlapping range"
    );

    resolved
}

/// Resolve every satellite against all the others, in order.
pub fn resolve_overlaps(satellites: &[SatelliteDefinition]) -> Vec<ProjectionRange> {
    satellites
        .iter()
        .map(|satellite| non_overlapping_range(satellite, satellites))
        .collect()
}
