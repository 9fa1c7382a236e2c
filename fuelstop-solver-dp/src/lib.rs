//! Forward dynamic-programming stop optimizer for fuelstop.
//!
//! [`ForwardDpOptimizer`] is the default implementation of the
//! [`StopOptimizer`](fuelstop_core::StopOptimizer) trait. Projected candidates
//! become nodes between an origin and a destination on the route's
//! mile-marker axis; a single forward pass computes the cheapest way to reach
//! every node on one tank per leg, and a parent-pointer backtrace turns the
//! destination's entry into a [`Plan`](fuelstop_core::Plan).
//!
//! Purchases are "fill to the next stop": each chosen station sells exactly
//! the fuel needed for the following leg. The vehicle departs with enough
//! fuel for the first leg.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dp;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use solver::{ForwardDpOptimizer, optimize_stops};
