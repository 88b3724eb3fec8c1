//! Offset-vector conversion and rigid projection.

use super::config::OffsetScaling;
use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::grid::OccupancyGrid;

/// Convert the metric robot-to-sensor offset into pixel units.
///
/// The result stays in floating point; rotation happens before any
/// truncation.
pub(crate) fn offset_to_pixels(
    offset: WorldPoint,
    grid: &OccupancyGrid,
    scaling: OffsetScaling,
) -> WorldPoint {
    match scaling {
        OffsetScaling::OriginRelative => {
            let d = offset - grid.origin();
            WorldPoint::new(d.x / grid.resolution(), d.y / grid.resolution())
        }
        OffsetScaling::ResolutionOnly => WorldPoint::new(
            offset.x / grid.resolution(),
            offset.y / grid.resolution(),
        ),
    }
}

/// Project a sensor pose to its candidate robot cell.
///
/// Rotates the pixel offset by the sensor heading and subtracts it from the
/// sensor cell; the floating-point result is truncated toward zero per
/// component.
pub(crate) fn project_candidate(
    fow: Pose2D,
    offset_px: WorldPoint,
    grid: &OccupancyGrid,
) -> GridCoord {
    let fow_cell = grid.world_to_grid(fow.position());
    let rotated = offset_px.rotate(fow.theta);
    GridCoord::new(
        (fow_cell.x as f32 - rotated.x) as i32,
        (fow_cell.y as f32 - rotated.y) as i32,
    )
}
