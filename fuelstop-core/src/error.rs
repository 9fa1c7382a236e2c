use thiserror::Error;

use crate::{ConfigError, RouteError};

/// Errors returned while planning refuelling stops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// No chain of stops keeps every leg within the tank range.
    #[error(
        "destination is unreachable with a {max_range_miles}-mile range over \
         {total_distance_miles} miles; a gap between stations exceeds the range"
    )]
    InfeasibleRoute {
        /// Tank range used for the search.
        max_range_miles: f64,
        /// Route length in miles.
        total_distance_miles: f64,
    },
    /// Vehicle or corridor configuration was invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// Route geometry violated its preconditions.
    #[error("invalid route: {0}")]
    EmptyRoute(#[from] RouteError),
}

/// Alias for the planning error type.
pub type Error = PlanError;
