//! `tk-data` — stop loading and route export.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`loader`]  | `load_stops_csv` / `load_stops_reader`                    |
//! | [`writer`]  | `RouteWriter` trait implemented by all export backends    |
//! | [`csv`]     | `CsvRouteWriter` — steps + path as two CSV files          |
//! | [`geojson`] | `GeoJsonWriter` (feature = `"geojson"` only)              |
//! | [`error`]   | `DataError`, `DataResult<T>`                              |
//!
//! Export writes a *computed* route for rendering or inspection; there is
//! no reload path and no itinerary store.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `geojson` | Enables GeoJSON export via the `geojson` crate.          |

pub mod csv;
pub mod error;
pub mod loader;
pub mod writer;

#[cfg(feature = "geojson")]
pub mod geojson;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvRouteWriter;
pub use error::{DataError, DataResult};
pub use loader::{load_stops_csv, load_stops_reader};
pub use writer::RouteWriter;

#[cfg(feature = "geojson")]
pub use crate::geojson::GeoJsonWriter;
