//! Travel mode enum and its speed model.
//!
//! The mode set is closed: every duration estimate in the framework comes
//! from one of these three speeds, so an unknown mode must be rejected at
//! the boundary (see [`TravelMode::from_token`]) rather than defaulted.
//!
//! | Mode    | Token     | Assumed speed |
//! |---------|-----------|---------------|
//! | Driving | `driving` | 40 km/h       |
//! | Cycling | `cycling` | 15 km/h       |
//! | Walking | `walking` | 5 km/h        |

use std::str::FromStr;

use crate::error::CoreError;

/// How the traveller moves between stops.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelMode {
    /// Private vehicle.
    Driving,
    /// Bicycle.
    Cycling,
    /// On foot.
    Walking,
}

impl TravelMode {
    /// Assumed average speed in km/h.
    #[inline]
    pub fn speed_kmh(self) -> f64 {
        match self {
            TravelMode::Driving => 40.0,
            TravelMode::Cycling => 15.0,
            TravelMode::Walking => 5.0,
        }
    }

    /// Estimated minutes to cover `distance_km` at this mode's speed.
    ///
    /// Total over the closed enum — no error path.  Non-negative for
    /// non-negative input.
    #[inline]
    pub fn minutes_for_km(self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh() * 60.0
    }

    /// Parse one of the wire tokens `driving` / `cycling` / `walking`.
    ///
    /// Anything else is a caller contract violation and yields
    /// [`CoreError::InvalidMode`] — the speed model never silently falls
    /// back to a default.
    pub fn from_token(token: &str) -> Result<TravelMode, CoreError> {
        match token.trim() {
            "driving" => Ok(TravelMode::Driving),
            "cycling" => Ok(TravelMode::Cycling),
            "walking" => Ok(TravelMode::Walking),
            other => Err(CoreError::InvalidMode(other.to_owned())),
        }
    }

    /// Wire token, useful for CSV column values and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Cycling => "cycling",
            TravelMode::Walking => "walking",
        }
    }
}

impl FromStr for TravelMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::from_token(s)
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
