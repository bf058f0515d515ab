//! What a strategy run reports back.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Configuration, Move, Tour};

use super::SearchStrategy;

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Loop iterations (construction links, or search steps).
    pub iterations: usize,
    /// 2-opt swaps attempted.
    pub attempted_swaps: usize,
    /// Attempts for which some reconnection kept the tour valid.
    pub feasible_swaps: usize,
    /// Feasible swaps that were kept.
    pub accepted_swaps: usize,
    /// Kept swaps that shortened the tour.
    pub improving_swaps: usize,
    /// Feasible swaps that were rolled back.
    pub reversed_swaps: usize,
}

/// Result of running one [`SearchStrategy`] over a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Strategy that produced this outcome.
    pub strategy: SearchStrategy,
    /// Best tour length found.
    pub best_distance: f64,
    /// Tour length when the strategy returned.
    pub final_distance: f64,
    /// Executed moves, in order (baseline construction moves first).
    pub moves: Vec<Move>,
    /// Run counters.
    pub stats: SearchStats,
    /// Snapshot of the tour as the strategy left it.
    pub saved: Configuration,
}

impl SearchOutcome {
    /// Saves the tour's final layout and packages the run.
    pub(crate) fn finish(
        strategy: SearchStrategy,
        tour: &mut Tour<'_>,
        best_distance: f64,
        moves: Vec<Move>,
        stats: SearchStats,
    ) -> Self {
        let saved = tour.save_result(best_distance);
        let final_distance = tour.total_distance();
        info!(
            event = "strategy_end",
            strategy = %strategy,
            best_distance,
            final_distance,
            moves = moves.len(),
            accepted_swaps = stats.accepted_swaps,
        );
        Self {
            strategy,
            best_distance,
            final_distance,
            moves,
            stats,
            saved,
        }
    }
}
