//! `tk-route` — tour ordering, path sampling, and route synthesis.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`tour`]     | `order_stops` — greedy nearest-neighbor tour ordering      |
//! | [`path`]     | `sample_path` — leg geometry at fixed sampling density     |
//! | [`route`]    | `Waypoint`, `RouteStep`, `Route`, `synthesize`             |
//! | [`provider`] | `RouteProvider` trait, default `HaversineProvider`         |
//! | [`plan`]     | `PlanRequest`, `Planner` — the engine boundary             |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                             |
//!
//! # Purity
//!
//! Every function in this crate is synchronous and side-effect-free: no
//! I/O, no shared mutable state, no per-call resources held afterwards.
//! A single [`Planner`] may be shared across threads and invoked from any
//! number of concurrent planning requests without coordination.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public route types.    |

pub mod error;
pub mod path;
pub mod plan;
pub mod provider;
pub mod route;
pub mod tour;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use path::sample_path;
pub use plan::{PlanRequest, Planner};
pub use provider::{HaversineProvider, RouteProvider};
pub use route::{synthesize, Route, RouteStep, Waypoint, ORIGIN_NAME};
pub use tour::order_stops;
