//! Planar geometry used to detect self-crossing tours.
//!
//! - [`Point`] — a 2D coordinate
//! - [`ccw`] — strict counter-clockwise orientation test
//! - [`segments_intersect`] — proper segment crossing test

mod segment;

pub use segment::{ccw, segments_intersect, Point};
