//! End-to-End Placement Pipeline Tests
//!
//! Drives [`PathMapper`] with the real grid-backed resolver and A* planner
//! over synthetic rooms to verify:
//! - Direct projection across an open room
//! - Perimeter recovery when the projected cell is occupied
//! - Grid-search fallback when the whole perimeter is blocked
//! - Dropped waypoints leaving the rest of the sweep intact
//!
//! Run with: `cargo test --test pipeline`

use approx::assert_abs_diff_eq;
use drishti_nav::{
    CellState, GridAStar, GridCoord, GridPerimeterResolver, MapperConfig, OccupancyGrid,
    PathMapper, Placement, Pose2D, WorldPoint,
};
use std::f32::consts::FRAC_PI_8;

// ============================================================================
// Helpers
// ============================================================================

/// Open room with one-meter cells and the origin at (0,0).
fn room(width: usize, height: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(width, height, 1.0, WorldPoint::ZERO).unwrap();
    grid.fill(CellState::Free);
    grid
}

fn occupy(grid: &mut OccupancyGrid, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        assert!(grid.set_cell(GridCoord::new(x, y), CellState::Occupied));
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn sweep_through_free_room_places_every_waypoint() {
    let grid = room(100, 100);
    let resolver = GridPerimeterResolver::new(&grid);
    let planner = GridAStar::default();
    let mapper = PathMapper::new(&grid, &resolver, &planner, MapperConfig::default());

    let sweep: Vec<Pose2D> = (0..10)
        .map(|i| Pose2D::new(20.0 + 5.0 * i as f32, 50.0, 0.0))
        .collect();

    let mapped = mapper.map_path(&sweep, WorldPoint::new(3.0, 0.0), GridCoord::new(10, 50));

    assert_eq!(mapped.len(), 10);
    assert_eq!(mapped.dropped(), 0);
    assert!(mapped.placements.iter().all(|p| *p == Placement::Direct));
    for (pose, fow) in mapped.poses.iter().zip(&sweep) {
        // Sensor faces +x, so the base trails 3 m behind
        assert_eq!(pose.x, fow.x - 3.0);
        assert_eq!(pose.y, 50.0);
        assert_eq!(pose.theta, 0.0);
    }
    assert_eq!(mapped.final_position, GridCoord::new(62, 50));
}

#[test]
fn occupied_target_recovers_via_perimeter() {
    let mut grid = room(100, 100);
    // Wall through the projected base cell
    for x in 45..=51 {
        grid.set_cell(GridCoord::new(x, 50), CellState::Occupied);
    }
    let resolver = GridPerimeterResolver::new(&grid);
    let planner = GridAStar::default();
    let mapper = PathMapper::new(&grid, &resolver, &planner, MapperConfig::default());

    let mapped = mapper.map_path(
        &[Pose2D::new(50.0, 50.0, 0.0)],
        WorldPoint::new(3.0, 0.0),
        GridCoord::new(10, 50),
    );

    assert_eq!(mapped.placements, vec![Placement::Perimeter]);
    let pose = mapped.poses[0];
    // Nearest accessible perimeter sample to the start sits one sampling
    // step above the blocked west sample
    assert_eq!(mapped.final_position, GridCoord::new(47, 51));
    assert_eq!(grid.world_to_grid(pose.position()), GridCoord::new(47, 51));
    assert_abs_diff_eq!(pose.theta, -FRAC_PI_8, epsilon = 1e-4);
    // Sample stays on the viewing circle
    assert_abs_diff_eq!(
        pose.position().distance(&WorldPoint::new(50.0, 50.0)),
        3.0,
        epsilon = 1e-4
    );
}

#[test]
fn blocked_perimeter_falls_back_to_grid_search() {
    let mut grid = room(100, 100);
    // Occupy every cell the perimeter sampler can land on, while leaving
    // gaps a planner can thread through
    occupy(
        &mut grid,
        &[
            (53, 50),
            (52, 51),
            (52, 52),
            (51, 52),
            (50, 53),
            (48, 52),
            (47, 52),
            (47, 51),
            (47, 50),
            (47, 48),
            (47, 47),
            (48, 47),
            (50, 47),
            (51, 47),
            (52, 47),
            (52, 48),
        ],
    );
    let resolver = GridPerimeterResolver::new(&grid);
    let planner = GridAStar::default();
    let mapper = PathMapper::new(&grid, &resolver, &planner, MapperConfig::default());

    let target = GridCoord::new(50, 50);
    let mapped = mapper.map_path(
        &[Pose2D::new(50.0, 50.0, 0.0)],
        WorldPoint::new(3.0, 0.0),
        GridCoord::new(10, 50),
    );

    assert_eq!(mapped.placements, vec![Placement::Fallback]);
    assert_eq!(mapped.len(), 1);
    // Planner stops at the first free cell inside the viewing circle
    assert!(grid.is_free(mapped.final_position));
    assert!(mapped.final_position.distance_squared(&target) <= 9);
    let pose = mapped.poses[0];
    assert_eq!(pose.position(), grid.grid_to_world(mapped.final_position));
    // Walking the emitted heading for the remaining distance reaches the
    // target, so the robot faces it
    let center = WorldPoint::new(50.0, 50.0);
    let reached = pose.position().point_at(pose.theta, pose.position().distance(&center));
    assert_abs_diff_eq!(reached.x, center.x, epsilon = 1e-3);
    assert_abs_diff_eq!(reached.y, center.y, epsilon = 1e-3);
}

#[test]
fn unreachable_target_is_dropped_and_sweep_continues() {
    let mut grid = room(100, 100);
    // Solid block swallowing the first target and its whole viewing circle
    for x in 46..=54 {
        for y in 46..=54 {
            grid.set_cell(GridCoord::new(x, y), CellState::Occupied);
        }
    }
    let resolver = GridPerimeterResolver::new(&grid);
    let planner = GridAStar::default();
    let mapper = PathMapper::new(&grid, &resolver, &planner, MapperConfig::default());

    let mapped = mapper.map_path(
        &[Pose2D::new(50.0, 50.0, 0.0), Pose2D::new(20.0, 20.0, 0.0)],
        WorldPoint::new(3.0, 0.0),
        GridCoord::new(10, 50),
    );

    assert_eq!(mapped.placements, vec![Placement::Dropped, Placement::Direct]);
    assert_eq!(mapped.poses, vec![Pose2D::new(17.0, 20.0, 0.0)]);
    assert_eq!(mapped.dropped(), 1);
    assert_eq!(mapped.final_position, GridCoord::new(17, 20));
}

#[test]
fn mixed_sweep_keeps_order_and_tracks_position() {
    let mut grid = room(100, 100);
    for x in 45..=51 {
        grid.set_cell(GridCoord::new(x, 50), CellState::Occupied);
    }
    let resolver = GridPerimeterResolver::new(&grid);
    let planner = GridAStar::default();
    let mapper = PathMapper::new(&grid, &resolver, &planner, MapperConfig::default());

    let sweep = [
        Pose2D::new(30.0, 50.0, 0.0),
        Pose2D::new(50.0, 50.0, 0.0),
        Pose2D::new(60.0, 50.0, 0.0),
    ];

    let mapped = mapper.map_path(&sweep, WorldPoint::new(3.0, 0.0), GridCoord::new(10, 50));

    assert_eq!(
        mapped.placements,
        vec![Placement::Direct, Placement::Perimeter, Placement::Direct]
    );
    assert_eq!(mapped.len(), 3);
    assert_eq!(mapped.poses[0], Pose2D::new(27.0, 50.0, 0.0));
    // Selection measures from (27,50), not from the sweep start
    assert_eq!(grid.world_to_grid(mapped.poses[1].position()), GridCoord::new(47, 51));
    assert_abs_diff_eq!(mapped.poses[1].theta, -FRAC_PI_8, epsilon = 1e-4);
    assert_eq!(mapped.poses[2], Pose2D::new(57.0, 50.0, 0.0));
    assert_eq!(mapped.final_position, GridCoord::new(57, 50));
}
