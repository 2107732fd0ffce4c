//! The `RouteWriter` trait implemented by all export backends.

use tk_route::Route;

use crate::error::DataResult;

/// Trait implemented by the CSV and GeoJSON route writers.
///
/// A writer may receive several routes before `finish`; each backend
/// documents how it keeps them apart.
pub trait RouteWriter {
    /// Export one synthesized route.
    fn write_route(&mut self, route: &Route) -> DataResult<()>;

    /// Flush and close the underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> DataResult<()>;
}
