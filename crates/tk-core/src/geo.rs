//! Geographic coordinate type and spatial utilities.
//!
//! `Coord` uses `f64` latitude/longitude in decimal degrees.  Itinerary legs
//! are short (hundreds of metres to tens of kilometres), and the metre and
//! minute figures shown to users are rounded from these values, so double
//! precision keeps them stable across platforms.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Total over all finite inputs: always non-negative, 0.0 when the two
    /// coordinates are identical.  Accuracy is ample for itinerary distance
    /// and duration estimates at city scale.
    pub fn distance_km(self, other: Coord) -> f64 {
        const R: f64 = 6_371.0; // mean Earth radius, kilometres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Point at fraction `t` along the straight line from `self` to `other`.
    ///
    /// Exact at the endpoints: `t = 0.0` returns `self`, `t = 1.0` returns
    /// `other` (the `(1 - t) * a + t * b` form guarantees this).  Straight
    /// lat/lon interpolation is sufficient at itinerary leg lengths; the
    /// path sampler does not need great-circle curvature.
    #[inline]
    pub fn lerp(self, other: Coord, t: f64) -> Coord {
        Coord {
            lat: self.lat * (1.0 - t) + other.lat * t,
            lon: self.lon * (1.0 - t) + other.lon * t,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
