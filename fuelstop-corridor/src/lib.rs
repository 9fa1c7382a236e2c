//! Projection engine for the fuelstop planner.
//!
//! [`CorridorProjector`] places refuelling candidates on a route's
//! mile-marker axis. Each candidate is matched against the route polyline
//! either by projecting onto the nearest segment or by snapping to the
//! nearest vertex ([`ProjectionStrategy`](fuelstop_core::ProjectionStrategy)),
//! then filtered by its offset from the route and its distance from the
//! start. Long routes are thinned first with [`sample_route`] so projection
//! cost stays bounded.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod projector;
mod sample;
mod segment;

pub use projector::{CorridorProjector, Placement};
pub use sample::sample_route;
pub use segment::{SegmentProjection, project_onto_segment};
