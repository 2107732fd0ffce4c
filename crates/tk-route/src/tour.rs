//! Greedy nearest-neighbor tour ordering.
//!
//! # Heuristic, not optimum
//!
//! The ordering is a deliberate approximation: from the origin, repeatedly
//! visit the nearest not-yet-visited stop.  It is not a TSP solver and can
//! produce tours longer than the global optimum; for the target input size
//! (tens of stops per request) the difference is acceptable and the
//! behavior is easy to predict.
//!
//! # Complexity
//!
//! O(n²) haversine evaluations for n stops.  If inputs ever grow to
//! thousands of stops the pool scan needs a spatial index or a different
//! heuristic; at tens of stops a linear scan wins on simplicity and
//! constant factor.

use tracing::trace;

use tk_core::{Coord, Place};

/// Order `stops` into a visiting sequence starting from `origin`.
///
/// The result is a permutation of `stops`: same multiset of ids, nothing
/// dropped or duplicated.  Distance ties break by input order (the earlier
/// stop wins), so the ordering is deterministic for identical input.
///
/// An empty slice yields an empty ordering; a single stop is returned
/// as-is.
pub fn order_stops(origin: Coord, stops: &[Place]) -> Vec<Place> {
    let mut pool: Vec<usize> = (0..stops.len()).collect();
    let mut ordered = Vec::with_capacity(stops.len());
    let mut current = origin;

    while !pool.is_empty() {
        // Strict `<` keeps the earliest pool entry on ties, and `pool`
        // preserves input order, so first occurrence wins.
        let mut best_pos = 0;
        let mut best_km = f64::INFINITY;
        for (pos, &idx) in pool.iter().enumerate() {
            let d = current.distance_km(stops[idx].coord);
            if d < best_km {
                best_km = d;
                best_pos = pos;
            }
        }

        let idx = pool.remove(best_pos);
        trace!(stop = %stops[idx].id, distance_km = best_km, "next nearest stop");
        current = stops[idx].coord;
        ordered.push(stops[idx].clone());
    }

    ordered
}
