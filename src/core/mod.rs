//! Core geometric types shared across the crate.
//!
//! - [`GridCoord`] and [`WorldPoint`]: grid-frame and world-frame coordinates
//! - [`Pose2D`]: world-frame pose (position + heading)
//! - [`math`]: angle utilities

pub mod math;
mod point;
mod pose;

pub use point::{GridCoord, WorldPoint};
pub use pose::Pose2D;
