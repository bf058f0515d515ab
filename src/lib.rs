//! # tsp-search
//!
//! Heuristic search for the Euclidean travelling salesman problem over an
//! edge-based tour that always encodes a single Hamiltonian cycle.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, TspInstance, Edge, Tour, TwoSwap)
//! - [`distance`] — Dense symmetric distance matrix
//! - [`geometry`] — Segment crossing test used to find self-intersections
//! - [`sampling`] — Seedable random helpers (uniform pick, distinct pair, coin flip)
//! - [`constructive`] — Tour construction (random, nearest neighbor)
//! - [`local_search`] — 2-opt improvement (overlap removal, hill climbing)
//! - [`annealing`] — Simulated annealing with a multi-phase temperature schedule
//! - [`strategy`] — Strategy selection, configuration and run outcome
//! - [`error`] — Error types

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod local_search;
pub mod models;
pub mod sampling;
pub mod strategy;

pub use error::{TspError, TspResult};
pub use strategy::{solve, SearchConfig, SearchOutcome, SearchStrategy};
