//! CSV export backend.
//!
//! Creates two files in the configured output directory:
//! - `route_steps.csv` — one row per leg
//! - `route_path.csv` — one row per sampled path coordinate
//!
//! Both carry a `route` column (0-based, in write order) so several routes
//! can share one pair of files.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use tk_route::Route;

use crate::error::DataResult;
use crate::writer::RouteWriter;

/// Writes synthesized routes to two CSV files.
pub struct CsvRouteWriter {
    steps:    Writer<File>,
    path:     Writer<File>,
    routes:   u32,
    finished: bool,
}

impl CsvRouteWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> DataResult<Self> {
        let mut steps = Writer::from_path(dir.join("route_steps.csv"))?;
        steps.write_record([
            "route",
            "leg",
            "instruction",
            "from_name",
            "to_name",
            "distance_m",
            "duration_min",
            "start_lat",
            "start_lon",
            "end_lat",
            "end_lon",
        ])?;

        let mut path = Writer::from_path(dir.join("route_path.csv"))?;
        path.write_record(["route", "seq", "lat", "lon"])?;

        Ok(Self {
            steps,
            path,
            routes: 0,
            finished: false,
        })
    }
}

impl RouteWriter for CsvRouteWriter {
    fn write_route(&mut self, route: &Route) -> DataResult<()> {
        let route_idx = self.routes;
        self.routes += 1;

        for (leg, step) in route.steps.iter().enumerate() {
            self.steps.write_record(&[
                route_idx.to_string(),
                leg.to_string(),
                step.instruction.clone(),
                step.from_name.clone(),
                step.to_name.clone(),
                step.distance_m.to_string(),
                step.duration_min.to_string(),
                step.start.lat.to_string(),
                step.start.lon.to_string(),
                step.end.lat.to_string(),
                step.end.lon.to_string(),
            ])?;
        }

        for (seq, coord) in route.path.iter().enumerate() {
            self.path.write_record(&[
                route_idx.to_string(),
                seq.to_string(),
                coord.lat.to_string(),
                coord.lon.to_string(),
            ])?;
        }

        Ok(())
    }

    fn finish(&mut self) -> DataResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.path.flush()?;
        Ok(())
    }
}
