//! Perimeter accessibility queries.
//!
//! When direct offset projection lands in an obstacle, the mapper asks an
//! [`AccessibilityResolver`] for reachable poses on the viewing circle around
//! the sensor target. Deployments backed by a full mapping stack plug in
//! their own resolver; [`GridPerimeterResolver`] answers from the occupancy
//! grid alone.

use crate::core::math::TWO_PI;
use crate::core::Pose2D;
use crate::grid::OccupancyGrid;
use log::{debug, trace};
use thiserror::Error;

/// Perimeter query parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerimeterRequest {
    /// Circle center; only the position is used.
    pub center: Pose2D,
    /// Circle radius in meters.
    pub radius: f32,
    /// Sampling step around the circle in radians.
    pub angular_step: f32,
}

/// Accessible poses found on a perimeter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerimeterResponse {
    /// Whether any accessible pose was found.
    pub accessible: bool,
    /// Accessible poses in sampling order (world frame).
    pub poses: Vec<Pose2D>,
}

/// Failure of the query call itself, distinct from an answer with no poses.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Resolver unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid perimeter request: {0}")]
    InvalidRequest(String),
}

/// Source of accessible poses around a target point.
///
/// Implementations answer synchronously. The mapper treats any
/// [`ResolverError`] as a signal to move on to the next recovery step, never
/// as a fatal failure.
pub trait AccessibilityResolver {
    /// Find accessible poses on the circle described by `request`.
    fn query_perimeter(
        &self,
        request: &PerimeterRequest,
    ) -> Result<PerimeterResponse, ResolverError>;
}

/// Resolver that samples the perimeter directly on the occupancy grid.
///
/// Walks the circle in `angular_step` increments over `[0, 2π)` and keeps
/// every sample whose cell is free and in bounds. Each kept pose faces the
/// circle center.
pub struct GridPerimeterResolver<'a> {
    grid: &'a OccupancyGrid,
}

impl<'a> GridPerimeterResolver<'a> {
    /// Create a resolver over the given grid.
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self { grid }
    }
}

impl<'a> AccessibilityResolver for GridPerimeterResolver<'a> {
    fn query_perimeter(
        &self,
        request: &PerimeterRequest,
    ) -> Result<PerimeterResponse, ResolverError> {
        if request.radius <= 0.0 || !request.radius.is_finite() {
            return Err(ResolverError::InvalidRequest(format!(
                "radius must be positive, got {}",
                request.radius
            )));
        }
        if request.angular_step <= 0.0 || !request.angular_step.is_finite() {
            return Err(ResolverError::InvalidRequest(format!(
                "angular step must be positive, got {}",
                request.angular_step
            )));
        }

        let center = request.center.position();
        let mut poses = Vec::new();
        let mut step_index = 0;
        loop {
            let angle = step_index as f32 * request.angular_step;
            if angle >= TWO_PI {
                break;
            }
            let sample = center.point_at(angle, request.radius);
            if self.grid.is_free(self.grid.world_to_grid(sample)) {
                let heading = sample.angle_to(&center);
                poses.push(Pose2D::from_position_angle(sample, heading));
                trace!(
                    "[Perimeter] accessible sample at ({:.2},{:.2})",
                    sample.x,
                    sample.y
                );
            }
            step_index += 1;
        }

        debug!(
            "[Perimeter] center=({:.2},{:.2}) radius={:.2}: {} accessible poses",
            center.x,
            center.y,
            request.radius,
            poses.len()
        );

        Ok(PerimeterResponse {
            accessible: !poses.is_empty(),
            poses,
        })
    }
}
