//! Overlap resolution fixtures.

use projection::{non_overlapping_range, resolve_overlaps};
use sat_common::{Range, SatelliteDefinition};
use test_utils::overlap::{Entry, AMERICAS, EUROPE, PACIFIC};
use test_utils::{assert_approx_eq, satellites};

fn build(entries: &[Entry]) -> Vec<SatelliteDefinition> {
    entries
        .iter()
        .map(|(id, nadir, start, end)| satellites::with_range(id, *nadir, *start, *end))
        .collect()
}

fn assert_degrees(range: &Range, start: f64, end: f64) {
    let (a, b) = range.to_degrees();
    assert_approx_eq!(a, start, 1e-9);
    assert_approx_eq!(b, end, 1e-9);
}

#[test]
fn test_single_satellite_unchanged() {
    let satellites = build(&[AMERICAS]);
    let resolved = non_overlapping_range(&satellites[0], &satellites);

    assert_eq!(resolved.range, satellites[0].longitude_range);
    assert!(!resolved.overlapping_left);
    assert!(!resolved.overlapping_right);
}

#[test]
fn test_two_satellites_split_across_seam() {
    let satellites = build(&[AMERICAS, PACIFIC]);
    let resolved = resolve_overlaps(&satellites);

    assert_degrees(&resolved[0].range, -100.0, 10.0);
    assert!(resolved[0].overlapping_left);
    assert!(!resolved[0].overlapping_right);

    assert_degrees(&resolved[1].range, 140.0, 260.0);
    assert!(!resolved[1].overlapping_left);
    assert!(resolved[1].overlapping_right);
}

#[test]
fn test_three_satellites() {
    let satellites = build(&[AMERICAS, PACIFIC, EUROPE]);
    let resolved = resolve_overlaps(&satellites);

    assert_degrees(&resolved[0].range, -100.0, 5.0);
    assert!(resolved[0].overlapping_left && resolved[0].overlapping_right);

    assert_degrees(&resolved[1].range, 140.0, 260.0);

    assert_degrees(&resolved[2].range, 5.0, 60.0);
    assert!(resolved[2].overlapping_left);
    assert!(!resolved[2].overlapping_right);
}

#[test]
fn test_order_independent_for_pairs() {
    let forward = resolve_overlaps(&build(&[AMERICAS, PACIFIC]));
    let reverse = resolve_overlaps(&build(&[PACIFIC, AMERICAS]));

    assert_eq!(forward[0], reverse[1]);
    assert_eq!(forward[1], reverse[0]);
}

#[test]
fn test_resolved_ranges_do_not_overlap() {
    let satellites = build(&[AMERICAS, PACIFIC, EUROPE]);
    let resolved = resolve_overlaps(&satellites);

    // Seam-aware check that each pair shares at most an edge
    for (i, a) in resolved.iter().enumerate() {
        for b in resolved.iter().skip(i + 1) {
            let a_mid = a.range.centre();
            let b_mid = b.range.centre();
            assert!(!b.range.contains(a_mid), "{} contains {}", b.range, a.range);
            assert!(!a.range.contains(b_mid), "{} contains {}", a.range, b.range);
        }
    }
}
