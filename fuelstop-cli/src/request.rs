//! JSON request format shared by the `plan` and `project` commands.
//!
//! A request carries the route geometry and the candidate stations:
//!
//! ```json
//! {
//!   "route": { "points": [{ "lat": 41.88, "lng": -87.63 }, { "lat": 35.23, "lng": -80.84 }] },
//!   "candidates": [{ "id": "7", "name": "Pilot", "lat": 39.1, "lng": -84.5, "price": 3.19 }]
//! }
//! ```
//!
//! The route is given either as `points` or as an encoded `polyline`.
//! Points may carry `distance_from_start` in miles; when every point omits
//! it, cumulative distances are measured with the haversine formula. The
//! trip length comes from `total_distance_miles` or `total_distance_meters`,
//! falling back to the last cumulative distance.

use fuelstop_core::DEFAULT_POLYLINE_PRECISION;
use fuelstop_engine::{Candidate, Route, RouteError, RoutePoint, metres_to_miles};
use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems with a decoded request that JSON parsing cannot catch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Neither `points` nor `polyline` was supplied.
    #[error("route needs either `points` or `polyline`")]
    MissingGeometry,
    /// Both `points` and `polyline` were supplied.
    #[error("route must not set both `points` and `polyline`")]
    AmbiguousGeometry,
    /// Some points carry `distance_from_start` and others do not.
    #[error("either every route point sets `distance_from_start` or none does")]
    PartialDistances,
    /// Route geometry failed validation.
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Top-level request document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanRequest {
    pub(crate) route: RouteSpec,
    #[serde(default)]
    pub(crate) candidates: Vec<CandidateSpec>,
}

impl PlanRequest {
    /// Convert into a validated route and the candidate list.
    pub(crate) fn into_inputs(self) -> Result<(Route, Vec<Candidate>), RequestError> {
        let route = self.route.to_route()?;
        let candidates = self
            .candidates
            .into_iter()
            .map(CandidateSpec::into_candidate)
            .collect();
        Ok((route, candidates))
    }
}

/// Route section of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) points: Vec<PointSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) polyline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) total_distance_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) total_distance_meters: Option<f64>,
}

impl RouteSpec {
    fn total_distance(&self) -> Option<f64> {
        self.total_distance_miles
            .or_else(|| self.total_distance_meters.map(metres_to_miles))
    }

    pub(crate) fn to_route(&self) -> Result<Route, RequestError> {
        let total = self.total_distance();
        match (&self.polyline, self.points.is_empty()) {
            (Some(_), false) => Err(RequestError::AmbiguousGeometry),
            (None, true) => Err(RequestError::MissingGeometry),
            (Some(encoded), true) => {
                let precision = self.precision.unwrap_or(DEFAULT_POLYLINE_PRECISION);
                Ok(Route::from_polyline(encoded, precision, total)?)
            }
            (None, false) => self.route_from_points(total),
        }
    }

    fn route_from_points(&self, total: Option<f64>) -> Result<Route, RequestError> {
        let measured: Option<Vec<RoutePoint>> = self
            .points
            .iter()
            .map(|point| {
                point
                    .distance_from_start
                    .map(|distance| RoutePoint::new(point.coord(), distance))
            })
            .collect();
        if let Some(points) = measured {
            let total = total
                .or_else(|| points.last().map(|point| point.distance_from_start))
                .unwrap_or_default();
            return Ok(Route::new(points, total)?);
        }
        if self
            .points
            .iter()
            .any(|point| point.distance_from_start.is_some())
        {
            return Err(RequestError::PartialDistances);
        }
        let coords: Vec<Coord<f64>> = self.points.iter().map(PointSpec::coord).collect();
        let route = match total {
            Some(miles) => Route::from_coords(&coords, miles),
            None => Route::from_coords_measured(&coords),
        }?;
        Ok(route)
    }
}

/// One route vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct PointSpec {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) distance_from_start: Option<f64>,
}

impl PointSpec {
    const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

/// One candidate station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CandidateSpec {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    pub(crate) price: f64,
}

impl CandidateSpec {
    fn into_candidate(self) -> Candidate {
        Candidate::new(
            self.id,
            self.name,
            Coord {
                x: self.lng,
                y: self.lat,
            },
            self.price,
        )
    }
}
