//! The engine boundary: planning requests in, routes out.
//!
//! # Degraded inputs
//!
//! Two inputs produce an empty route rather than an error, leaving the
//! "ask the user for more" decision to the caller:
//!
//! - no origin — ordering and synthesis both start from the traveller's
//!   location, so without one the request degrades to "no route";
//! - no selected stops — a zero-leg itinerary is valid and inert.
//!
//! An invalid travel-mode token, by contrast, is rejected at parse time by
//! [`TravelMode::from_token`][tk_core::TravelMode::from_token] and never
//! reaches the planner.

use rayon::prelude::*;
use tracing::debug;

use tk_core::{Coord, Place, TravelMode};

use crate::error::RouteResult;
use crate::provider::{HaversineProvider, RouteProvider};
use crate::route::{Route, Waypoint};
use crate::tour::order_stops;

// ── PlanRequest ───────────────────────────────────────────────────────────────

/// One itinerary planning request.
///
/// All fields are plain values owned by the request; the engine holds no
/// state across requests.
#[derive(Clone, Debug)]
pub struct PlanRequest {
    /// The traveller's current location.  `None` disables ordering and
    /// degrades the request to the empty route.
    pub origin: Option<Coord>,
    /// Selected places, in selection order.
    pub stops: Vec<Place>,
    /// Travel mode for duration estimates.
    pub mode: TravelMode,
    /// Skip the ordering heuristic and visit `stops` exactly as supplied.
    pub keep_order: bool,
}

impl PlanRequest {
    /// Request a tour of `stops` from `origin`, reordered by the heuristic.
    pub fn new(origin: Coord, stops: Vec<Place>, mode: TravelMode) -> Self {
        Self {
            origin: Some(origin),
            stops,
            mode,
            keep_order: false,
        }
    }

    /// Builder-style switch: visit stops in the supplied order verbatim.
    pub fn keep_order(mut self) -> Self {
        self.keep_order = true;
        self
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Stateless route planner over a pluggable [`RouteProvider`].
///
/// # Type parameter
///
/// `P` defaults to [`HaversineProvider`].  Swap it at compile time for a
/// network-backed provider with no runtime overhead.
///
/// # Concurrency
///
/// `plan` borrows the planner immutably and touches only request-local
/// state, so one instance may serve any number of threads at once.
pub struct Planner<P: RouteProvider = HaversineProvider> {
    provider: P,
}

impl Planner<HaversineProvider> {
    /// Planner with the default haversine provider.
    pub fn new() -> Self {
        Self { provider: HaversineProvider }
    }
}

impl Default for Planner<HaversineProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RouteProvider> Planner<P> {
    /// Planner over a custom route provider.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Plan one itinerary: order the stops (unless `keep_order`), prepend
    /// the origin, and synthesize the route via the provider.
    pub fn plan(&self, request: &PlanRequest) -> RouteResult<Route> {
        let Some(origin) = request.origin else {
            debug!("plan request without origin; returning empty route");
            return Ok(Route::empty());
        };
        if request.stops.is_empty() {
            debug!("plan request with no stops; returning empty route");
            return Ok(Route::empty());
        }

        let ordered = if request.keep_order {
            request.stops.clone()
        } else {
            order_stops(origin, &request.stops)
        };

        let mut waypoints = Vec::with_capacity(ordered.len() + 1);
        waypoints.push(Waypoint::origin(origin));
        waypoints.extend(ordered.into_iter().map(Waypoint::from));

        self.provider.route(&waypoints, request.mode)
    }

    /// Plan a batch of independent requests in parallel.
    ///
    /// Results come back in input order; the requests themselves run on the
    /// rayon pool with no ordering guarantee between them, which is safe
    /// because each request touches only its own state.
    pub fn plan_all(&self, requests: &[PlanRequest]) -> Vec<RouteResult<Route>> {
        requests.par_iter().map(|r| self.plan(r)).collect()
    }
}
