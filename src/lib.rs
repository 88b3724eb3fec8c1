//! # Drishti Nav
//!
//! Maps sensor field-of-view sweep paths onto feasible robot-base paths
//! over an occupancy grid.
//!
//! Coverage planners emit the path the sensor's field of view should sweep,
//! not the path the robot base can drive. This crate closes that gap: for
//! every sweep waypoint it finds a free base pose from which the sensor,
//! mounted at a fixed offset, covers the waypoint.
//!
//! ## Placement pipeline
//!
//! Each waypoint runs through up to three steps, stopping at the first one
//! that produces a free pose:
//!
//! ```text
//!  sweep waypoint
//!        |
//!        v
//!  1. offset projection      rotate the mount offset, subtract, check cell
//!        |
//!        v
//!  2. perimeter query        accessible poses on the viewing circle
//!        |
//!        v
//!  3. grid search            plan toward the target, stop inside the circle
//!        |
//!        v
//!     dropped                sweep continues with the next waypoint
//! ```
//!
//! ## Coordinate frames
//!
//! Sweep waypoints and emitted poses live in the metric world frame. The
//! grid anchors cell (0,0) at its origin; world-to-cell conversion truncates
//! toward zero and cell-to-world conversion returns the cell corner, so
//! emitted positions are quantized to the grid. Headings are radians,
//! counterclockwise, zero along +x, and pass through unnormalized.
//!
//! ## Quick start
//!
//! ```
//! use drishti_nav::{
//!     CellState, GridAStar, GridCoord, GridPerimeterResolver, MapperConfig, OccupancyGrid,
//!     PathMapper, Pose2D, WorldPoint,
//! };
//!
//! fn main() -> drishti_nav::Result<()> {
//!     let mut grid = OccupancyGrid::new(200, 200, 0.1, WorldPoint::ZERO)?;
//!     grid.fill(CellState::Free);
//!
//!     let resolver = GridPerimeterResolver::new(&grid);
//!     let planner = GridAStar::default();
//!     let mapper = PathMapper::new(&grid, &resolver, &planner, MapperConfig::default());
//!
//!     // Sensor mounted 0.3 m ahead of the base
//!     let sweep = [Pose2D::new(5.0, 5.0, 0.0), Pose2D::new(6.0, 5.0, 0.0)];
//!     let mapped = mapper.map_path(&sweep, WorldPoint::new(0.3, 0.0), GridCoord::new(10, 10));
//!
//!     assert_eq!(mapped.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: coordinate and pose primitives
//! - [`grid`]: the occupancy grid the mapper reads
//! - [`access`]: perimeter accessibility queries
//! - [`planning`]: grid path search for the fallback step
//! - [`mapper`]: the placement pipeline itself
//! - [`error`]: crate-wide error type

pub mod access;
pub mod core;
pub mod error;
pub mod grid;
pub mod mapper;
pub mod planning;

pub use crate::access::{
    AccessibilityResolver, GridPerimeterResolver, PerimeterRequest, PerimeterResponse,
    ResolverError,
};
pub use crate::core::{GridCoord, Pose2D, WorldPoint};
pub use crate::error::{DrishtiError, Result};
pub use crate::grid::{CellState, OccupancyGrid};
pub use crate::mapper::{MappedPath, MapperConfig, OffsetScaling, PathMapper, Placement, TieBreak};
pub use crate::planning::{CostWeights, GridAStar, PathPlanner};
