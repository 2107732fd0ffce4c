//! GeoJSON export backend (feature = `"geojson"` only).
//!
//! Writes one `FeatureCollection` per file: a `LineString` feature tracing
//! each route's sampled path, plus one `Point` feature per step at the leg
//! destination.  The output drops straight onto any web map for visual
//! inspection of a planned tour.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use tk_route::Route;

use crate::error::DataResult;
use crate::writer::RouteWriter;

/// Accumulates route features and serializes them on `finish`.
pub struct GeoJsonWriter {
    file:     File,
    features: Vec<Feature>,
    routes:   u32,
    finished: bool,
}

impl GeoJsonWriter {
    /// Create (or truncate) the output file at `path`.
    ///
    /// The file is opened eagerly so path problems surface before any
    /// planning work, but content is only written by `finish`.
    pub fn new(path: &Path) -> DataResult<Self> {
        Ok(Self {
            file:     File::create(path)?,
            features: Vec::new(),
            routes:   0,
            finished: false,
        })
    }

    fn properties(pairs: &[(&str, serde_json::Value)]) -> JsonObject {
        let mut props = JsonObject::new();
        for (key, value) in pairs {
            props.insert((*key).to_owned(), value.clone());
        }
        props
    }
}

impl RouteWriter for GeoJsonWriter {
    fn write_route(&mut self, route: &Route) -> DataResult<()> {
        let route_idx = self.routes;
        self.routes += 1;

        // An empty route has no geometry to contribute.
        if route.path.is_empty() {
            return Ok(());
        }

        let line: Vec<Vec<f64>> = route.path.iter().map(|c| vec![c.lon, c.lat]).collect();
        self.features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(line))),
            id: None,
            properties: Some(Self::properties(&[
                ("route", json!(route_idx)),
                ("distance_km", json!(route.distance_km)),
                ("duration_min", json!(route.duration_min)),
                ("legs", json!(route.steps.len())),
            ])),
            foreign_members: None,
        });

        for (leg, step) in route.steps.iter().enumerate() {
            self.features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![step.end.lon, step.end.lat]))),
                id: None,
                properties: Some(Self::properties(&[
                    ("route", json!(route_idx)),
                    ("leg", json!(leg)),
                    ("name", json!(step.to_name)),
                    ("instruction", json!(step.instruction)),
                    ("distance_m", json!(step.distance_m)),
                    ("duration_min", json!(step.duration_min)),
                ])),
                foreign_members: None,
            });
        }

        Ok(())
    }

    fn finish(&mut self) -> DataResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let collection = FeatureCollection {
            bbox: None,
            features: std::mem::take(&mut self.features),
            foreign_members: None,
        };
        serde_json::to_writer(&self.file, &collection)?;
        self.file.flush()?;
        Ok(())
    }
}
