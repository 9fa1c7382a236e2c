//! Planner configuration and its validation.
//!
//! Defaults mirror the production service settings: a 500-mile tank, 10
//! miles per gallon and a 25-mile search corridor either side of the route.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default single-tank range in miles.
pub const DEFAULT_MAX_RANGE_MILES: f64 = 500.0;
/// Default fuel efficiency in miles per gallon.
pub const DEFAULT_MPG: f64 = 10.0;
/// Default maximum offset from the route, in miles.
pub const DEFAULT_MAX_CORRIDOR_WIDTH_MILES: f64 = 25.0;
/// Routes with more points than this are sub-sampled before projection.
pub const DEFAULT_SAMPLING_THRESHOLD: usize = 2000;
/// Approximate number of points kept after sub-sampling.
pub const DEFAULT_SAMPLING_TARGET: usize = 2000;

/// Errors returned by configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Tank range was zero, negative or not finite.
    #[error("max range must be a positive number of miles, found {0}")]
    NonPositiveRange(f64),
    /// Fuel efficiency was zero, negative or not finite.
    #[error("mpg must be positive, found {0}")]
    NonPositiveMpg(f64),
    /// Corridor width was negative or not finite.
    #[error("corridor width must be zero or more miles, found {0}")]
    NegativeCorridorWidth(f64),
    /// Sub-sampling would keep no points.
    #[error("sampling target must keep at least two points")]
    ZeroSamplingTarget,
}

/// How candidates are placed on the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ProjectionStrategy {
    /// Project onto the nearest polyline segment.
    #[default]
    Segment,
    /// Snap to the nearest polyline vertex.
    NearestPoint,
}

impl ProjectionStrategy {
    /// Stable textual name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::NearestPoint => "nearest-point",
        }
    }
}

impl fmt::Display for ProjectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`ProjectionStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown projection strategy {0:?} (expected \"segment\" or \"nearest-point\")")]
pub struct ParseStrategyError(pub String);

impl FromStr for ProjectionStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segment" => Ok(Self::Segment),
            "nearest-point" | "nearest_point" | "point" => Ok(Self::NearestPoint),
            other => Err(ParseStrategyError(other.to_owned())),
        }
    }
}

/// Route sub-sampling applied before projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Routes with more points than this are thinned.
    pub threshold: usize,
    /// Approximate number of points kept when thinning.
    pub target: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SAMPLING_THRESHOLD,
            target: DEFAULT_SAMPLING_TARGET,
        }
    }
}

/// Vehicle constraints consumed by a [`StopOptimizer`](crate::StopOptimizer).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleProfile {
    /// Distance coverable on a full tank, in miles.
    pub max_range_miles: f64,
    /// Fuel efficiency in miles per gallon.
    pub mpg: f64,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            max_range_miles: DEFAULT_MAX_RANGE_MILES,
            mpg: DEFAULT_MPG,
        }
    }
}

impl VehicleProfile {
    /// Check that range and efficiency are positive and finite.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonPositiveRange`] or
    /// [`ConfigError::NonPositiveMpg`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.max_range_miles) {
            return Err(ConfigError::NonPositiveRange(self.max_range_miles));
        }
        if !is_positive(self.mpg) {
            return Err(ConfigError::NonPositiveMpg(self.mpg));
        }
        Ok(())
    }
}

/// Limits applied when filtering projected candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorridorLimits {
    /// Maximum offset from the route, in miles.
    pub max_corridor_width_miles: f64,
    /// Maximum position along the route, in miles from the start.
    pub max_range_miles: f64,
}

/// Full configuration for a planning request.
///
/// # Examples
/// ```
/// use fuelstop_core::{PlannerConfig, ProjectionStrategy};
///
/// let config = PlannerConfig::default()
///     .with_max_range_miles(450.0)
///     .with_mpg(20.0)
///     .with_strategy(ProjectionStrategy::NearestPoint);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.vehicle().mpg, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Distance coverable on a full tank, in miles.
    pub max_range_miles: f64,
    /// Fuel efficiency in miles per gallon.
    pub mpg: f64,
    /// Maximum offset from the route for a candidate to be considered.
    pub max_corridor_width_miles: f64,
    /// Projection variant.
    pub strategy: ProjectionStrategy,
    /// Route sub-sampling.
    pub sampling: SamplingConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_range_miles: DEFAULT_MAX_RANGE_MILES,
            mpg: DEFAULT_MPG,
            max_corridor_width_miles: DEFAULT_MAX_CORRIDOR_WIDTH_MILES,
            strategy: ProjectionStrategy::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Override the tank range.
    #[must_use]
    pub const fn with_max_range_miles(mut self, miles: f64) -> Self {
        self.max_range_miles = miles;
        self
    }

    /// Override the fuel efficiency.
    #[must_use]
    pub const fn with_mpg(mut self, mpg: f64) -> Self {
        self.mpg = mpg;
        self
    }

    /// Override the corridor width.
    #[must_use]
    pub const fn with_max_corridor_width_miles(mut self, miles: f64) -> Self {
        self.max_corridor_width_miles = miles;
        self
    }

    /// Override the projection strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: ProjectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Override the sub-sampling parameters.
    #[must_use]
    pub const fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Vehicle constraints for the optimizer.
    #[must_use]
    pub const fn vehicle(&self) -> VehicleProfile {
        VehicleProfile {
            max_range_miles: self.max_range_miles,
            mpg: self.mpg,
        }
    }

    /// Filtering limits for the projector.
    #[must_use]
    pub const fn corridor_limits(&self) -> CorridorLimits {
        CorridorLimits {
            max_corridor_width_miles: self.max_corridor_width_miles,
            max_range_miles: self.max_range_miles,
        }
    }

    /// Check every invariant.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vehicle().validate()?;
        if !self.max_corridor_width_miles.is_finite() || self.max_corridor_width_miles < 0.0 {
            return Err(ConfigError::NegativeCorridorWidth(
                self.max_corridor_width_miles,
            ));
        }
        if self.sampling.target < 2 {
            return Err(ConfigError::ZeroSamplingTarget);
        }
        Ok(())
    }
}

const fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
