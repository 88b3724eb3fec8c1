//! A* pathfinding on the occupancy grid.
//!
//! 8-connected search with octile-distance heuristic, used as the bundled
//! [`PathPlanner`] for the mapper's fallback step.

use super::{CostWeights, PathPlanner};
use crate::core::GridCoord;
use crate::grid::OccupancyGrid;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A node in the A* search
#[derive(Clone, Debug)]
struct AStarNode {
    coord: GridCoord,
    g_cost: f32, // accumulated cost from the start cell
    f_cost: f32, // g_cost plus remaining-distance estimate
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum, so compare with f flipped
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 8-connected A* planner over the occupancy grid.
#[derive(Clone, Debug)]
pub struct GridAStar {
    /// Maximum number of nodes to expand before giving up
    max_iterations: usize,
}

impl Default for GridAStar {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
        }
    }
}

impl GridAStar {
    /// Caps the search at `max_iterations` node expansions
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

impl PathPlanner for GridAStar {
    fn plan(
        &self,
        map: &OccupancyGrid,
        start: GridCoord,
        goal: GridCoord,
        weights: CostWeights,
        _resolution: f32,
    ) -> Vec<GridCoord> {
        trace!(
            "[AStar] plan: start=({},{}) goal=({},{})",
            start.x,
            start.y,
            goal.x,
            goal.y
        );

        if !map.is_free(start) || !map.is_free(goal) {
            debug!("[AStar] start or goal not traversable");
            return Vec::new();
        }

        let mut open = BinaryHeap::new();
        let mut closed = HashSet::new();
        let mut parent: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut best_g: HashMap<GridCoord, f32> = HashMap::new();

        open.push(AStarNode {
            coord: start,
            g_cost: 0.0,
            f_cost: octile(start, goal, weights),
        });
        best_g.insert(start, 0.0);

        let mut expanded = 0;

        while let Some(current) = open.pop() {
            expanded += 1;

            if expanded > self.max_iterations {
                debug!("[AStar] gave up after {} expansions", expanded);
                return Vec::new();
            }

            if current.coord == goal {
                let path = rebuild_path(&parent, goal);
                trace!(
                    "[AStar] path found: {} cells, cost={:.2}, expanded={}",
                    path.len(),
                    current.g_cost,
                    expanded
                );
                return path;
            }

            if closed.contains(&current.coord) {
                continue;
            }
            closed.insert(current.coord);

            for neighbor in current.coord.neighbors_8() {
                if closed.contains(&neighbor) || !map.is_free(neighbor) {
                    continue;
                }

                let is_diagonal = neighbor.x != current.coord.x && neighbor.y != current.coord.y;
                let step_cost = if is_diagonal {
                    weights.diagonal
                } else {
                    weights.straight
                };
                let tentative_g = best_g[&current.coord] + step_cost;

                let known_g = best_g.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative_g < known_g {
                    parent.insert(neighbor, current.coord);
                    best_g.insert(neighbor, tentative_g);
                    open.push(AStarNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + octile(neighbor, goal, weights),
                    });
                }
            }
        }

        debug!("[AStar] no path after expanding {} nodes", expanded);
        Vec::new()
    }
}

/// Octile distance heuristic for 8-connected grids
fn octile(from: GridCoord, to: GridCoord, weights: CostWeights) -> f32 {
    let dx = (from.x - to.x).abs() as f32;
    let dy = (from.y - to.y).abs() as f32;
    let min = dx.min(dy);
    let max = dx.max(dy);
    min * weights.diagonal + (max - min) * weights.straight
}

/// Walks the parent links back from the goal and reverses the result
fn rebuild_path(parent: &HashMap<GridCoord, GridCoord>, goal: GridCoord) -> Vec<GridCoord> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&prev) = parent.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
