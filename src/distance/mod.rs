//! Precomputed pairwise distances between cities.
//!
//! Provides a dense symmetric distance matrix keyed by city position.

mod matrix;

pub use matrix::DistanceMatrix;
