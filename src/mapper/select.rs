//! Candidate selection policies for the recovery steps.

use super::config::TieBreak;
use crate::core::{GridCoord, Pose2D};
use crate::grid::OccupancyGrid;
use log::trace;

/// Pick the accessible pose closest to the last robot position.
///
/// Distances are squared integer pixel distances between each candidate's
/// cell and `last`. The running best starts at `max_distance_sq`, so
/// candidates beyond that ceiling are never picked (`Last` still admits a
/// candidate exactly at the ceiling, `First` does not). Returns `None` when
/// no candidate qualifies.
pub(crate) fn select_nearest_candidate(
    poses: &[Pose2D],
    last: GridCoord,
    grid: &OccupancyGrid,
    tie_break: TieBreak,
    max_distance_sq: f32,
) -> Option<Pose2D> {
    let mut best_distance_sq = max_distance_sq;
    let mut best = None;

    for &pose in poses {
        let cell = grid.world_to_grid(pose.position());
        let distance_sq = cell.distance_squared(&last) as f32;
        let admit = match tie_break {
            TieBreak::Last => distance_sq <= best_distance_sq,
            TieBreak::First => distance_sq < best_distance_sq,
        };
        if admit {
            trace!(
                "[PathMapper] perimeter candidate ({:.2},{:.2}) at distance_sq={}",
                pose.x,
                pose.y,
                distance_sq
            );
            best_distance_sq = distance_sq;
            best = Some(pose);
        }
    }

    best
}

/// First path point inside the viewing circle around `goal`.
///
/// Scans in path order (start toward goal) and returns the first cell whose
/// pixel distance to `goal` is at most `radius_px`.
pub(crate) fn first_within_radius(
    path: &[GridCoord],
    goal: GridCoord,
    radius_px: f32,
) -> Option<GridCoord> {
    let radius_sq = radius_px * radius_px;
    path.iter()
        .copied()
        .find(|point| point.distance_squared(&goal) as f32 <= radius_sq)
}
