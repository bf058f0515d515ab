//! 2-opt based improvement of a random starting tour.
//!
//! - [`remove_overlaps`] — Swap away geometric crossings, no distance check
//! - [`hill_climbing`] — Random swaps, kept only when strictly shorter

mod hill_climbing;
mod remove_overlaps;

pub use hill_climbing::hill_climbing;
pub use remove_overlaps::remove_overlaps;

use crate::error::{TspError, TspResult};
use crate::models::Tour;

/// Swap-based strategies need at least two edges to pick from.
pub(crate) fn require_pairs(tour: &Tour<'_>) -> TspResult<()> {
    if tour.len() < 2 {
        return Err(TspError::DegenerateInput {
            cities: tour.len(),
            required: 2,
        });
    }
    Ok(())
}
