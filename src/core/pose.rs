//! 2D pose type shared by sensor waypoints and robot placements.
//!
//! Angles grow counterclockwise from the +X axis of the world frame.

use super::point::WorldPoint;

/// A planar pose: metric position plus heading.
///
/// `theta` is stored exactly as given; construction never wraps it. Waypoints
/// placed by direct offset projection inherit the sensor heading unchanged,
/// so the field must round-trip bit-exact. Use
/// [`normalize_angle`](crate::core::math::normalize_angle) when a wrapped
/// angle is required.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2D {
    /// World-frame x in meters.
    pub x: f32,
    /// World-frame y in meters.
    pub y: f32,
    /// Heading in radians, counterclockwise from +X.
    pub theta: f32,
}

impl Pose2D {
    /// Builds a pose from coordinates and heading.
    #[inline]
    pub const fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Pose at the world origin facing along +X.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Attaches a heading to a metric position.
    #[inline]
    pub fn from_position_angle(position: WorldPoint, theta: f32) -> Self {
        Self::new(position.x, position.y, theta)
    }

    /// The position component, dropping the heading.
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}
