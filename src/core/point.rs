//! Grid-cell and metric coordinate types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Integer cell address in an occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridCoord {
    /// Builds a coordinate from column and row indices.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`, in cells.
    ///
    /// Staying in integers keeps nearest-cell comparisons exact.
    #[inline]
    pub fn distance_squared(&self, other: &GridCoord) -> i32 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }

    /// The eight adjacent cells, cardinals before diagonals.
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        let GridCoord { x, y } = *self;
        [
            GridCoord::new(x + 1, y),
            GridCoord::new(x, y + 1),
            GridCoord::new(x - 1, y),
            GridCoord::new(x, y - 1),
            GridCoord::new(x + 1, y + 1),
            GridCoord::new(x - 1, y + 1),
            GridCoord::new(x - 1, y - 1),
            GridCoord::new(x + 1, y - 1),
        ]
    }
}

/// World coordinates (meters, f32).
///
/// Also used for metric displacement vectors such as the robot-to-sensor
/// offset, which rotate and scale but never translate.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
}

impl WorldPoint {
    /// Builds a point from metric coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Origin of the world frame.
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Straight-line distance to `other` in meters.
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let (dx, dy) = (other.x - self.x, other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Heading of the ray from this point toward `other`, in radians
    /// counterclockwise from the +X axis.
    #[inline]
    pub fn angle_to(&self, other: &WorldPoint) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point reached by travelling `distance` along `angle` from here.
    #[inline]
    pub fn point_at(&self, angle: f32, distance: f32) -> WorldPoint {
        let (sin_a, cos_a) = angle.sin_cos();
        WorldPoint::new(self.x + distance * cos_a, self.y + distance * sin_a)
    }

    /// Rotates the point about the world origin by `angle` radians.
    #[inline]
    pub fn rotate(&self, angle: f32) -> WorldPoint {
        let (sin_a, cos_a) = angle.sin_cos();
        WorldPoint::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Magnitude when the point is read as a displacement from the origin.
    #[inline]
    pub fn length(&self) -> f32 {
        self.distance(&Self::ZERO)
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
