//! `tk-core` — foundational types for the `tripkit` trip-planning framework.
//!
//! This crate is a dependency of every other `tk-*` crate.  It intentionally
//! has no `tk-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`geo`]       | `Coord`, haversine distance, linear interpolation   |
//! | [`transport`] | `TravelMode` enum and its speed model               |
//! | [`place`]     | `Place` — a named point of interest                 |
//! | [`error`]     | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod geo;
pub mod place;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coord;
pub use place::Place;
pub use transport::TravelMode;
