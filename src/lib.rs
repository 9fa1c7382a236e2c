//! Facade crate for the fuelstop refuelling planner.
//!
//! This crate re-exports the core domain types and wires the default
//! projection engine and stop optimizer together behind [`Planner`], with
//! [`optimize`] and [`project`] as one-call entry points.

#![forbid(unsafe_code)]

mod planner;

pub use fuelstop_core::{
    Candidate, ConfigError, CorridorLimits, Error, FuelStop, Plan, PlanError, PlannerConfig,
    PolylineError, ProjectedCandidate, ProjectionStrategy, Projector, Route, RouteError,
    RoutePoint, SamplingConfig, StopOptimizer, VehicleProfile, decode_polyline, haversine_miles,
    metres_to_miles, miles_to_metres,
};
pub use fuelstop_corridor::CorridorProjector;
pub use fuelstop_solver_dp::{ForwardDpOptimizer, optimize_stops};
pub use planner::{Planner, optimize, project};
