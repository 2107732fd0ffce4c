//! Route value types and the leg-by-leg synthesizer.
//!
//! # Units and rounding
//!
//! Internal accumulation is in `f64` kilometres and minutes; rounding to
//! the user-facing figures happens exactly once, at the edge:
//!
//! | Field                  | Unit       | Rounding        |
//! |------------------------|------------|-----------------|
//! | `RouteStep::distance_m`| metres     | nearest integer |
//! | `RouteStep::duration_min`| minutes  | nearest integer |
//! | `Route::distance_km`   | kilometres | one decimal     |
//! | `Route::duration_min`  | minutes    | nearest integer |

use tracing::debug;

use tk_core::{Coord, Place, TravelMode};

use crate::path::sample_path;

/// Display name for the traveller's current location.  The origin has no
/// caller-supplied identity, so every itinerary starts from this sentinel.
pub const ORIGIN_NAME: &str = "Your Location";

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// One entry in an ordered stop sequence: the origin or a selected place.
///
/// Unifying both under a name + coordinate pair lets the synthesizer walk
/// the sequence pairwise without caring which entries carry ids or
/// categories.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub name: String,
    pub coord: Coord,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, coord: Coord) -> Self {
        Self { name: name.into(), coord }
    }

    /// The traveller's starting location, named by the [`ORIGIN_NAME`]
    /// sentinel.
    pub fn origin(coord: Coord) -> Self {
        Self::new(ORIGIN_NAME, coord)
    }
}

impl From<&Place> for Waypoint {
    fn from(place: &Place) -> Self {
        Self::new(place.name.clone(), place.coord)
    }
}

impl From<Place> for Waypoint {
    fn from(place: Place) -> Self {
        Self { name: place.name, coord: place.coord }
    }
}

// ── RouteStep ─────────────────────────────────────────────────────────────────

/// One leg of a route: the travel segment between two consecutive stops.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Human-readable instruction for this leg.
    pub instruction: String,
    /// Leg length in metres, rounded.
    pub distance_m: u32,
    /// Estimated leg duration in minutes, rounded.
    pub duration_min: u32,
    /// Coordinate the leg departs from.
    pub start: Coord,
    /// Coordinate the leg arrives at.
    pub end: Coord,
    /// Display name of the departure stop ([`ORIGIN_NAME`] for the first leg).
    pub from_name: String,
    /// Display name of the destination stop.
    pub to_name: String,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A synthesized route over an ordered stop sequence.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Total distance in kilometres, rounded to one decimal.
    pub distance_km: f64,
    /// Total estimated duration in minutes, rounded.
    pub duration_min: u32,
    /// One step per consecutive waypoint pair.
    pub steps: Vec<RouteStep>,
    /// Flattened sampled path over the whole journey, in travel order, with
    /// no duplicate coordinate at leg boundaries.
    pub path: Vec<Coord>,
}

impl Route {
    /// The zero-leg route: a valid, inert itinerary rather than an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` if the route has no legs.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// ── Synthesizer ───────────────────────────────────────────────────────────────

/// Build a [`Route`] over `waypoints` (origin first) for the given mode.
///
/// Pure and total: fewer than two waypoints yields [`Route::empty`], and
/// any well-formed sequence fully succeeds — there are no partial-failure
/// states.
///
/// Each consecutive pair contributes one [`RouteStep`] (haversine distance,
/// speed-model duration) and one sampled segment.  The first leg keeps all
/// of its sampled points; every later leg drops its first point, which
/// duplicates the previous leg's last.
pub fn synthesize(waypoints: &[Waypoint], mode: TravelMode) -> Route {
    if waypoints.len() < 2 {
        return Route::empty();
    }

    let mut steps = Vec::with_capacity(waypoints.len() - 1);
    let mut path: Vec<Coord> = Vec::new();
    let mut total_km = 0.0;
    let mut total_min = 0.0;

    for pair in waypoints.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);

        let leg_km = from.coord.distance_km(to.coord);
        let leg_min = mode.minutes_for_km(leg_km);

        let segment = sample_path(from.coord, to.coord);
        if path.is_empty() {
            path.extend(segment);
        } else {
            // The segment's first point equals the previous leg's last.
            path.extend(segment.into_iter().skip(1));
        }

        steps.push(RouteStep {
            instruction: format!("Travel from {} to {}", from.name, to.name),
            distance_m: (leg_km * 1000.0).round() as u32,
            duration_min: leg_min.round() as u32,
            start: from.coord,
            end: to.coord,
            from_name: from.name.clone(),
            to_name: to.name.clone(),
        });

        total_km += leg_km;
        total_min += leg_min;
    }

    debug!(
        legs = steps.len(),
        distance_km = total_km,
        duration_min = total_min,
        mode = %mode,
        "route synthesized"
    );

    Route {
        distance_km: (total_km * 10.0).round() / 10.0,
        duration_min: total_min.round() as u32,
        steps,
        path,
    }
}
