//! Refuelling candidates before and after projection onto a route.

use geo::Coord;

/// A refuelling station as returned by the spatial-query collaborator.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::Candidate;
///
/// let station = Candidate::new("opis-42", "Pilot #42", Coord { x: -86.1, y: 39.8 }, 3.29);
/// assert_eq!(station.id, "opis-42");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// External identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// WGS84 position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Price per gallon.
    pub price: f64,
}

impl Candidate {
    /// Construct a candidate.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coord<f64>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            price,
        }
    }

    /// Whether the position and price are usable numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.location.x.is_finite() && self.location.y.is_finite() && self.price.is_finite()
    }
}

/// A [`Candidate`] placed on the route's mile-marker axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedCandidate {
    /// The station itself.
    pub candidate: Candidate,
    /// Position along the route, in miles from the start.
    pub distance_from_start: f64,
    /// Offset from the route, in miles.
    pub distance_from_route: f64,
}

impl ProjectedCandidate {
    /// Attach route placement to a candidate.
    #[must_use]
    pub const fn new(
        candidate: Candidate,
        distance_from_start: f64,
        distance_from_route: f64,
    ) -> Self {
        Self {
            candidate,
            distance_from_start,
            distance_from_route,
        }
    }

    /// Price per gallon of the underlying candidate.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.candidate.price
    }
}
