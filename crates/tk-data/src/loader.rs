//! CSV stop loader.
//!
//! # CSV format
//!
//! One row per point of interest:
//!
//! ```csv
//! id,name,lat,lon,category
//! cathedral,Cathedral Basilica,30.6890,-88.0444,church
//! fort,Fort Condé,30.6874,-88.0393,historic site
//! park,Bienville Square,30.6920,-88.0420,
//! ```
//!
//! An empty `category` cell becomes `None`.  Coordinates must be finite
//! and within geographic bounds (|lat| ≤ 90, |lon| ≤ 180); anything else
//! is rejected with the offending value named in the error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tk_core::{Coord, Place};

use crate::error::{DataError, DataResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    id:       String,
    name:     String,
    lat:      f64,
    lon:      f64,
    #[serde(default)]
    category: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load places from a CSV file, preserving row order.
pub fn load_stops_csv(path: &Path) -> DataResult<Vec<Place>> {
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or inline stop lists
/// embedded in application binaries.
pub fn load_stops_reader<R: Read>(reader: R) -> DataResult<Vec<Place>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stops = Vec::new();

    for result in csv_reader.deserialize::<StopRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        validate_coord(&row.id, row.lat, row.lon)?;

        let mut place = Place::new(row.id, row.name, Coord::new(row.lat, row.lon));
        if !row.category.trim().is_empty() {
            place = place.with_category(row.category.trim());
        }
        stops.push(place);
    }

    Ok(stops)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate_coord(id: &str, lat: f64, lon: f64) -> DataResult<()> {
    if !lat.is_finite() || lat.abs() > 90.0 {
        return Err(DataError::Parse(format!(
            "stop {id:?}: latitude {lat} out of range [-90, 90]"
        )));
    }
    if !lon.is_finite() || lon.abs() > 180.0 {
        return Err(DataError::Parse(format!(
            "stop {id:?}: longitude {lon} out of range [-180, 180]"
        )));
    }
    Ok(())
}
