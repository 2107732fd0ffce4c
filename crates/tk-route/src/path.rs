//! Leg geometry sampling.
//!
//! In the absence of a road network the path between two stops is drawn as
//! a straight line, sampled densely enough to render smoothly on a map.
//! This is a visual stand-in, not a real-road path; a network-backed
//! [`RouteProvider`][crate::RouteProvider] supplies its own geometry.

use tk_core::Coord;

/// Target spacing between samples: roughly one point per 500 m.
pub const SAMPLE_SPACING_KM: f64 = 0.5;

/// Legs shorter than `MIN_SEGMENTS * SAMPLE_SPACING_KM` still get this many
/// segments so short hops don't render as a bare two-point line.
pub const MIN_SEGMENTS: usize = 5;

/// Sample the straight segment from `a` to `b` inclusive of both endpoints.
///
/// `segments = max(5, floor(length_km / 0.5))`, one point at each fraction
/// `j / segments` for `j in 0..=segments`.  Guarantees `out[0] == a` and
/// `out[last] == b` exactly, so consecutive legs can be stitched by
/// dropping the duplicated boundary point.
pub fn sample_path(a: Coord, b: Coord) -> Vec<Coord> {
    let length_km = a.distance_km(b);
    // Cast truncates toward zero, which is floor for non-negative input.
    let segments = ((length_km / SAMPLE_SPACING_KM) as usize).max(MIN_SEGMENTS);

    (0..=segments)
        .map(|j| a.lerp(b, j as f64 / segments as f64))
        .collect()
}
