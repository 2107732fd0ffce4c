//! Named points of interest.
//!
//! `Place` values are owned by the caller (the selection UI, a CSV file, a
//! search service) and passed into the engine by reference or clone.  The
//! engine never mutates them.

use crate::geo::Coord;

/// A named geographic location a traveller wants to visit.
///
/// `id` is a caller-supplied identifier, unique within one planning
/// request.  `category` is free-form ("museum", "park", …) and carried
/// through untouched for display purposes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id: String,
    pub name: String,
    pub coord: Coord,
    pub category: Option<String>,
}

impl Place {
    /// Construct a place with no category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, coord: Coord) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coord,
            category: None,
        }
    }

    /// Builder-style category setter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.coord)
    }
}
