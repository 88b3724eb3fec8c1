//! Sweep-to-base path mapping.
//!
//! [`PathMapper`] turns a sensor sweep path into robot base poses. Each
//! sweep waypoint goes through up to three placement steps:
//!
//! 1. Direct projection: rotate the sensor offset by the waypoint heading,
//!    subtract it from the waypoint cell and keep the result when that cell
//!    is free.
//! 2. Perimeter recovery: ask an [`AccessibilityResolver`] for reachable
//!    poses on the viewing circle around the waypoint and take the one
//!    closest to the previous robot position.
//! 3. Grid-search fallback: plan a path from the previous robot position
//!    toward the waypoint and stop at the first cell inside the viewing
//!    circle.
//!
//! A waypoint for which all three steps fail is dropped and mapping
//! continues with the next waypoint.

mod config;
mod offset;
mod select;

pub use config::{MapperConfig, OffsetScaling, TieBreak};

use crate::access::{AccessibilityResolver, PerimeterRequest};
use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::grid::OccupancyGrid;
use crate::planning::PathPlanner;
use log::{debug, trace};
use offset::{offset_to_pixels, project_candidate};
use select::{first_within_radius, select_nearest_candidate};

/// How a single sweep waypoint was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The direct offset projection landed on a free cell.
    Direct,
    /// A perimeter candidate around the target was selected.
    Perimeter,
    /// A grid search toward the target reached the viewing circle.
    Fallback,
    /// Every step failed; the waypoint produced no pose.
    Dropped,
}

/// Result of mapping a sweep path onto the robot base.
#[derive(Clone, Debug, PartialEq)]
pub struct MappedPath {
    /// Feasible robot poses in sweep order. Dropped waypoints leave no entry.
    pub poses: Vec<Pose2D>,
    /// Per-waypoint outcome, parallel to the input sweep path.
    pub placements: Vec<Placement>,
    /// Robot cell after the last placed waypoint, or the start cell when
    /// nothing was placed.
    pub final_position: GridCoord,
}

impl MappedPath {
    /// Number of placed poses.
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// True when no waypoint could be placed.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Number of waypoints that produced no pose.
    pub fn dropped(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| **p == Placement::Dropped)
            .count()
    }
}

/// Maps sensor sweep paths onto feasible robot base paths.
///
/// The mapper borrows its grid and collaborators and keeps no state between
/// calls, so one instance can map any number of paths.
pub struct PathMapper<'a, R, P> {
    grid: &'a OccupancyGrid,
    resolver: &'a R,
    planner: &'a P,
    config: MapperConfig,
}

impl<'a, R, P> PathMapper<'a, R, P>
where
    R: AccessibilityResolver,
    P: PathPlanner,
{
    /// Create a mapper over the given grid, resolver and planner.
    pub fn new(
        grid: &'a OccupancyGrid,
        resolver: &'a R,
        planner: &'a P,
        config: MapperConfig,
    ) -> Self {
        Self {
            grid,
            resolver,
            planner,
            config,
        }
    }

    /// Map a sensor sweep path onto robot base poses.
    ///
    /// `fow_path` holds the sensor poses in the world frame, in sweep order.
    /// `offset` is the metric robot-to-sensor displacement in the robot
    /// frame. `start` is the robot cell before the first waypoint.
    ///
    /// Waypoints are processed strictly in order and each placed pose
    /// becomes the reference position for the next waypoint. The returned
    /// [`MappedPath`] carries one [`Placement`] per input waypoint; poses of
    /// dropped waypoints are absent.
    pub fn map_path(
        &self,
        fow_path: &[Pose2D],
        offset: WorldPoint,
        start: GridCoord,
    ) -> MappedPath {
        let offset_px = offset_to_pixels(offset, self.grid, self.config.offset_scaling);
        let radius = offset.length();
        let radius_px = offset_px.length();

        let mut poses = Vec::with_capacity(fow_path.len());
        let mut placements = Vec::with_capacity(fow_path.len());
        let mut last = start;

        for &fow in fow_path {
            match self.place_waypoint(fow, offset_px, radius, radius_px, last) {
                Some((pose, cell, placement)) => {
                    trace!(
                        "[PathMapper] waypoint ({:.2},{:.2},{:.2}) placed {:?} at ({},{})",
                        fow.x,
                        fow.y,
                        fow.theta,
                        placement,
                        cell.x,
                        cell.y
                    );
                    poses.push(pose);
                    placements.push(placement);
                    last = cell;
                }
                None => {
                    debug!(
                        "[PathMapper] dropped waypoint ({:.2},{:.2})",
                        fow.x, fow.y
                    );
                    placements.push(Placement::Dropped);
                }
            }
        }

        let mapped = MappedPath {
            poses,
            placements,
            final_position: last,
        };
        debug!(
            "[PathMapper] mapped {} of {} waypoints ({} dropped)",
            mapped.len(),
            fow_path.len(),
            mapped.dropped()
        );
        mapped
    }

    /// Run the placement steps for one waypoint.
    ///
    /// Returns the placed pose, its cell and the step that produced it, or
    /// `None` when the waypoint must be dropped.
    fn place_waypoint(
        &self,
        fow: Pose2D,
        offset_px: WorldPoint,
        radius: f32,
        radius_px: f32,
        last: GridCoord,
    ) -> Option<(Pose2D, GridCoord, Placement)> {
        // Step 1: rigid offset projection
        let candidate = project_candidate(fow, offset_px, self.grid);
        if self.grid.is_free(candidate) {
            let pose = Pose2D::from_position_angle(self.grid.grid_to_world(candidate), fow.theta);
            return Some((pose, candidate, Placement::Direct));
        }

        // Step 2: accessible poses on the viewing circle
        if let Some(selected) = self.perimeter_candidate(fow, radius, last) {
            let cell = self.grid.world_to_grid(selected.position());
            return Some((selected, cell, Placement::Perimeter));
        }

        // Step 3: grid search toward the target
        let goal = self.grid.world_to_grid(fow.position());
        let path = self.planner.plan(
            self.grid,
            last,
            goal,
            self.config.cost_weights,
            self.grid.resolution(),
        );
        let chosen = first_within_radius(&path, goal, radius_px)?;
        let position = self.grid.grid_to_world(chosen);
        let theta = (fow.y - position.y).atan2(fow.x - position.x);
        Some((
            Pose2D::from_position_angle(position, theta),
            chosen,
            Placement::Fallback,
        ))
    }

    /// Query the resolver and select the best perimeter candidate.
    ///
    /// Any resolver failure, inaccessible answer or empty selection yields
    /// `None` so the caller moves on to the grid search.
    fn perimeter_candidate(&self, fow: Pose2D, radius: f32, last: GridCoord) -> Option<Pose2D> {
        let request = PerimeterRequest {
            center: fow,
            radius,
            angular_step: self.config.angular_step,
        };
        match self.resolver.query_perimeter(&request) {
            Ok(response) if response.accessible && !response.poses.is_empty() => {
                select_nearest_candidate(
                    &response.poses,
                    last,
                    self.grid,
                    self.config.tie_break,
                    self.config.max_candidate_distance_sq,
                )
            }
            Ok(_) => {
                debug!(
                    "[PathMapper] no perimeter candidates around ({:.2},{:.2})",
                    fow.x, fow.y
                );
                None
            }
            Err(err) => {
                debug!("[PathMapper] perimeter query failed: {}", err);
                None
            }
        }
    }
}
