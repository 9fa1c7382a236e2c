//! Core domain types for the fuelstop engine.
//!
//! The crate holds everything the projection engine and the stop optimizer
//! share: validated route geometry, candidate and plan records, planner
//! configuration, errors, and the [`Projector`] / [`StopOptimizer`] traits
//! that separate the two components. Geodesy helpers live here too so both
//! sides measure distance the same way.
//!
//! Constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
pub mod config;
mod error;
pub mod geodesy;
pub mod plan;
pub mod planner;
pub mod polyline;
pub mod route;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{Candidate, ProjectedCandidate};
pub use config::{
    ConfigError, CorridorLimits, DEFAULT_MAX_CORRIDOR_WIDTH_MILES, DEFAULT_MAX_RANGE_MILES,
    DEFAULT_MPG, DEFAULT_SAMPLING_TARGET, DEFAULT_SAMPLING_THRESHOLD, ParseStrategyError,
    PlannerConfig, ProjectionStrategy, SamplingConfig, VehicleProfile,
};
pub use error::{Error, PlanError};
pub use geodesy::{
    EARTH_RADIUS_MILES, METRES_PER_MILE, MILES_PER_METRE, cumulative_distances, haversine_miles,
    metres_to_miles, miles_to_metres,
};
pub use plan::{FuelStop, Plan};
pub use planner::{Projector, StopOptimizer};
pub use polyline::{DEFAULT_POLYLINE_PRECISION, PolylineError, decode_polyline};
pub use route::{Route, RouteError, RoutePoint};
