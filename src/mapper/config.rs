//! Mapper configuration and policy knobs.

use crate::error::{DrishtiError, Result};
use crate::planning::CostWeights;
use serde::{Deserialize, Serialize};

/// Tie handling for the perimeter candidate scan.
///
/// The scan keeps a running best while walking candidates in response order.
/// `Last` admits a candidate that matches the current best distance
/// (less-or-equal compare), so the last member of a tied group wins. `First`
/// admits only strict improvements, so the first member wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// First candidate of a tied group wins (strict less-than compare)
    First,
    /// Last candidate of a tied group wins (less-or-equal compare)
    Last,
}

/// Metric-to-pixel conversion applied to the sensor offset vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffsetScaling {
    /// Subtract the map origin before dividing by resolution, treating the
    /// offset like an absolute world coordinate. Reproduces the historical
    /// conversion this mapper replaces.
    OriginRelative,
    /// Divide by resolution only, treating the offset as a relative
    /// displacement.
    ResolutionOnly,
}

/// Configuration for the path mapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Sampling step for perimeter queries in radians.
    /// Default: π/8
    pub angular_step: f32,

    /// Step costs handed to the fallback planner.
    /// Default: straight 1.0, diagonal sqrt(2)
    pub cost_weights: CostWeights,

    /// Offset-vector conversion policy.
    /// Default: OriginRelative
    pub offset_scaling: OffsetScaling,

    /// Tie handling in the perimeter candidate scan.
    /// Default: Last
    pub tie_break: TieBreak,

    /// Starting best value of the perimeter scan, in squared pixels.
    /// Candidates farther than this from the last robot position are never
    /// selected.
    /// Default: 1e5
    pub max_candidate_distance_sq: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            angular_step: std::f32::consts::FRAC_PI_8,
            cost_weights: CostWeights::default(),
            offset_scaling: OffsetScaling::OriginRelative,
            tie_break: TieBreak::Last,
            max_candidate_distance_sq: 1e5,
        }
    }
}

impl MapperConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the perimeter sampling step.
    pub fn with_angular_step(mut self, step: f32) -> Self {
        self.angular_step = step;
        self
    }

    /// Builder-style setter for planner step costs.
    pub fn with_cost_weights(mut self, weights: CostWeights) -> Self {
        self.cost_weights = weights;
        self
    }

    /// Builder-style setter for the offset conversion policy.
    pub fn with_offset_scaling(mut self, scaling: OffsetScaling) -> Self {
        self.offset_scaling = scaling;
        self
    }

    /// Builder-style setter for perimeter tie handling.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builder-style setter for the perimeter selection ceiling.
    pub fn with_max_candidate_distance_sq(mut self, distance_sq: f32) -> Self {
        self.max_candidate_distance_sq = distance_sq;
        self
    }

    /// Check the configuration for unusable values.
    pub fn validate(&self) -> Result<()> {
        if self.angular_step <= 0.0 || !self.angular_step.is_finite() {
            return Err(DrishtiError::InvalidConfig(format!(
                "angular_step must be positive, got {}",
                self.angular_step
            )));
        }
        if self.cost_weights.straight <= 0.0 || self.cost_weights.diagonal <= 0.0 {
            return Err(DrishtiError::InvalidConfig(
                "cost weights must be positive".to_string(),
            ));
        }
        if self.max_candidate_distance_sq <= 0.0 {
            return Err(DrishtiError::InvalidConfig(format!(
                "max_candidate_distance_sq must be positive, got {}",
                self.max_candidate_distance_sq
            )));
        }
        Ok(())
    }
}
