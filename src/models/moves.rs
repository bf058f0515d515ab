//! Executed reconnection moves, in the order a strategy performed them.
//!
//! A renderer replays these to animate a run; the search never reads them.

use serde::{Deserialize, Serialize};

use super::EdgeId;

/// One executed change to a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Move {
    /// A construction step assigned an edge its endpoints.
    Link {
        /// Edge that changed.
        edge: EdgeId,
        /// New start city position.
        start: usize,
        /// New end city position.
        end: usize,
    },
    /// An accepted 2-opt reconnection.
    Swap {
        /// First edge touched.
        edge1: EdgeId,
        /// Second edge touched.
        edge2: EdgeId,
        /// City moved from the first edge to the second.
        city1: usize,
        /// City moved from the second edge to the first.
        city2: usize,
    },
    /// The annealing temperature at this point of the run.
    Temperature {
        /// Current temperature.
        value: f64,
    },
    /// The tour was rolled back to a saved configuration.
    Restore {
        /// Total distance after the rollback.
        distance: f64,
    },
}
