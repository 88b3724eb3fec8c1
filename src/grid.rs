//! Occupancy grid consumed by the path mapper.
//!
//! The grid uses a coordinate system where:
//! - (0, 0) is at `origin` in world coordinates
//! - Positive X is to the right (columns), positive Y is up (rows)
//! - Cell (x, y) covers the area from (origin + x*resolution) to
//!   (origin + (x+1)*resolution)
//!
//! The mapper only reads the grid; the mutators exist so callers can build
//! one from their map source.

use crate::core::{GridCoord, WorldPoint};
use crate::error::{DrishtiError, Result};
use serde::{Deserialize, Serialize};

/// Occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Cell known to be traversable
    Free = 0,

    /// Cell blocked or never observed
    #[default]
    Occupied = 1,
}

impl CellState {
    /// Can the robot occupy this cell?
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }
}

/// Dense 2D occupancy grid anchored in the world frame.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    /// Cell states in row-major order (index = y * width + x)
    cells: Vec<CellState>,
    /// Columns in the grid
    width: usize,
    /// Rows in the grid
    height: usize,
    /// Metric size of one cell edge
    resolution: f32,
    /// World position of the corner of cell (0, 0)
    origin: WorldPoint,
}

impl OccupancyGrid {
    /// Create a new grid with every cell `Occupied`.
    ///
    /// Fails when either dimension is zero or the resolution is not strictly
    /// positive.
    pub fn new(width: usize, height: usize, resolution: f32, origin: WorldPoint) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DrishtiError::InvalidGrid(format!(
                "dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        if resolution <= 0.0 || !resolution.is_finite() {
            return Err(DrishtiError::InvalidGrid(format!(
                "resolution must be positive, got {}",
                resolution
            )));
        }
        Ok(Self {
            cells: vec![CellState::Occupied; width * height],
            width,
            height,
            resolution,
            origin,
        })
    }

    /// Width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Meters covered by one cell edge
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// World-frame anchor of cell (0, 0)
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Number of cells in the grid
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Convert world coordinates to grid coordinates.
    ///
    /// Components are truncated toward zero.
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let d = point - self.origin;
        GridCoord::new(
            (d.x / self.resolution) as i32,
            (d.y / self.resolution) as i32,
        )
    }

    /// Convert grid coordinates to world coordinates (cell corner).
    ///
    /// Inverse of [`world_to_grid`](Self::world_to_grid) up to quantization:
    /// a world point converted to a cell and back moves less than one cell.
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            coord.x as f32 * self.resolution + self.origin.x,
            coord.y as f32 * self.resolution + self.origin.y,
        )
    }

    /// True when `coord` lies inside the grid
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Row-major index for `coord`, or `None` when out of bounds
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Get cell state at grid coordinates
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CellState> {
        self.coord_to_index(coord).map(|i| self.cells[i])
    }

    /// True iff `coord` is in bounds and the cell is `Free`
    #[inline]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| self.cells[i].is_free())
            .unwrap_or(false)
    }

    /// Set the state of one cell. Returns false when out of bounds.
    #[inline]
    pub fn set_cell(&mut self, coord: GridCoord, state: CellState) -> bool {
        if let Some(i) = self.coord_to_index(coord) {
            self.cells[i] = state;
            true
        } else {
            false
        }
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }
}
