//! Grid path planning for the fallback search.
//!
//! The mapper consumes planners through the [`PathPlanner`] trait;
//! [`GridAStar`] is the bundled implementation. External planners adapt
//! their own search behind the same trait.

mod astar;

pub use astar::GridAStar;

use crate::core::GridCoord;
use crate::grid::OccupancyGrid;
use serde::{Deserialize, Serialize};

/// Step costs for grid planning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostWeights {
    /// Cost of a cardinal step.
    /// Default: 1.0
    pub straight: f32,
    /// Cost of a diagonal step.
    /// Default: sqrt(2)
    pub diagonal: f32,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            straight: 1.0,
            diagonal: std::f32::consts::SQRT_2,
        }
    }
}

/// Grid path search consumed by the mapper's fallback step.
///
/// Returns the cell path from `start` to `goal` inclusive, ordered from
/// start toward goal, or an empty vector when no path exists. `resolution`
/// carries the metric cell size for planner backends that need it; the grid
/// passes its own.
pub trait PathPlanner {
    /// Plan a path between two cells on the given map.
    fn plan(
        &self,
        map: &OccupancyGrid,
        start: GridCoord,
        goal: GridCoord,
        weights: CostWeights,
        resolution: f32,
    ) -> Vec<GridCoord>;
}
