//! citywalk — end-to-end demo for the tripkit framework.
//!
//! Plans a walking tour of downtown Mobile, Alabama: loads eight points of
//! interest from an inline CSV, orders them from a hotel doorstep on Royal
//! Street, prints the step-by-step itinerary, and exports the route as CSV
//! and GeoJSON (drop `out/tour.geojson` onto any web map to see it).

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use tk_core::{Coord, TravelMode};
use tk_data::{load_stops_reader, CsvRouteWriter, GeoJsonWriter, RouteWriter};
use tk_route::{PlanRequest, Planner};

// ── Constants ─────────────────────────────────────────────────────────────────

const MODE_TOKEN: &str = "walking";
const OUT_DIR: &str = "./out";

// Hotel doorstep on Royal Street.
const ORIGIN_LAT: f64 = 30.6912;
const ORIGIN_LON: f64 = -88.0399;

// ── Stops CSV ─────────────────────────────────────────────────────────────────

const STOPS_CSV: &str = "\
id,name,lat,lon,category\n\
cathedral,Cathedral Basilica of the Immaculate Conception,30.6893,-88.0448,church\n\
fort,Fort Condé,30.6874,-88.0396,historic site\n\
square,Bienville Square,30.6920,-88.0427,park\n\
museum,History Museum of Mobile,30.6878,-88.0403,museum\n\
exploreum,Gulf Coast Exploreum,30.6883,-88.0417,museum\n\
saenger,Saenger Theatre,30.6905,-88.0439,theatre\n\
library,Ben May Main Library,30.6830,-88.0443,library\n\
mgpark,Mardi Gras Park,30.6877,-88.0388,park\n\
";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let stops = load_stops_reader(Cursor::new(STOPS_CSV))?;
    let mode = TravelMode::from_token(MODE_TOKEN)?;
    let origin = Coord::new(ORIGIN_LAT, ORIGIN_LON);

    println!("planning a {mode} tour of {} stops from {origin}", stops.len());

    let planner = Planner::new();
    let request = PlanRequest::new(origin, stops, mode);
    let route = planner.plan(&request)?;

    println!();
    for (i, step) in route.steps.iter().enumerate() {
        println!(
            "{:>2}. {:<70} {:>6} m  {:>3} min",
            i + 1,
            step.instruction,
            step.distance_m,
            step.duration_min
        );
    }
    println!();
    println!(
        "total: {:.1} km, about {} min on foot, {} path points",
        route.distance_km,
        route.duration_min,
        route.path.len()
    );

    // ── Export ────────────────────────────────────────────────────────────
    let out_dir = Path::new(OUT_DIR);
    std::fs::create_dir_all(out_dir)?;

    let mut csv_writer = CsvRouteWriter::new(out_dir)?;
    csv_writer.write_route(&route)?;
    csv_writer.finish()?;

    let mut geojson_writer = GeoJsonWriter::new(&out_dir.join("tour.geojson"))?;
    geojson_writer.write_route(&route)?;
    geojson_writer.finish()?;

    println!("wrote route_steps.csv, route_path.csv, and tour.geojson to {OUT_DIR}");
    Ok(())
}
