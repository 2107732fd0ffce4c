//! Routing provider trait and the default haversine implementation.
//!
//! # Pluggability
//!
//! The planner requests routes via the [`RouteProvider`] trait, so
//! applications can swap in a network-backed provider (OSRM, GraphHopper,
//! a commercial API) without touching the ordering heuristic or the
//! `plan` boundary.  The default [`HaversineProvider`] synthesizes routes
//! from great-circle distances and the mode speed table — always available,
//! no network, no credentials.
//!
//! # Thread safety
//!
//! Implementations must be `Send + Sync` so a single planner can serve
//! concurrent requests from multiple threads.

use tk_core::TravelMode;

use crate::error::RouteResult;
use crate::route::{synthesize, Route, Waypoint};

/// Pluggable route source: ordered waypoints and a mode in, a full
/// [`Route`] (distance, duration, steps, geometry) out.
pub trait RouteProvider: Send + Sync {
    /// Compute a route visiting `waypoints` in the given order.
    ///
    /// Implementations backed by real services may fail (network, quota,
    /// unroutable coordinates); the default provider never does.
    fn route(&self, waypoints: &[Waypoint], mode: TravelMode) -> RouteResult<Route>;
}

/// Great-circle route synthesis: straight-line legs, speed-table durations.
///
/// Less faithful than a road-network router (it ignores streets entirely)
/// but total over well-formed input and dependency-free, which makes it
/// the default and the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineProvider;

impl RouteProvider for HaversineProvider {
    fn route(&self, waypoints: &[Waypoint], mode: TravelMode) -> RouteResult<Route> {
        Ok(synthesize(waypoints, mode))
    }
}
