//! Crossing removal.
//!
//! # Algorithm
//!
//! Build a random tour, then make a fixed number of passes over the edges.
//! For each edge, sample one edge crossing it (at the moment it is
//! visited) and attempt a 2-opt swap between the two. Swaps are kept on
//! geometric grounds alone: no distance comparison is made.

use rand::Rng;
use tracing::info;

use crate::constructive::random_tour;
use crate::error::TspResult;
use crate::models::Tour;
use crate::strategy::{SearchOutcome, SearchStats, SearchStrategy};

use super::require_pairs;

/// Removes crossings from a random tour by 2-opt swaps.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, Tour, TspInstance};
/// use tsp_search::local_search::remove_overlaps;
///
/// let instance = TspInstance::new(
///     (0..10).map(|i| {
///         let a = std::f64::consts::TAU * i as f64 / 10.0;
///         City::new(i, a.cos(), a.sin())
///     }).collect(),
/// ).unwrap();
/// let mut tour = Tour::new(&instance);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// remove_overlaps(&mut tour, 10, &mut rng).unwrap();
/// assert!(tour.is_valid());
/// ```
pub fn remove_overlaps<R: Rng>(
    tour: &mut Tour<'_>,
    passes: usize,
    rng: &mut R,
) -> TspResult<SearchOutcome> {
    require_pairs(tour)?;
    info!(
        event = "strategy_start",
        strategy = "remove_overlaps",
        cities = tour.len(),
        passes,
    );

    let baseline = random_tour(tour, rng)?;
    let mut moves = baseline.moves;
    let mut stats = SearchStats::default();

    for _ in 0..passes {
        for edge in 0..tour.len() {
            stats.iterations += 1;
            let Some(other) = tour.sample_conflict(edge, rng) else {
                continue;
            };
            stats.attempted_swaps += 1;
            if let Some(swap) = tour.attempt_two_swap(edge, other) {
                stats.feasible_swaps += 1;
                stats.accepted_swaps += 1;
                moves.push(swap.as_move());
            }
        }
    }

    tour.ensure_valid("overlap removal")?;
    let distance = tour.total_distance();
    Ok(SearchOutcome::finish(
        SearchStrategy::RemoveOverlaps,
        tour,
        distance,
        moves,
        stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::models::{City, TspInstance};

    fn circle(n: usize) -> TspInstance {
        let cities = (0..n)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                City::new(i, 10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        TspInstance::new(cities).expect("non-empty")
    }

    #[test]
    fn test_remove_overlaps_valid() {
        let inst = circle(16);
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(42);
        let outcome = remove_overlaps(&mut tour, 10, &mut rng).expect("runs");
        assert!(tour.is_valid());
        assert_eq!(outcome.stats.iterations, 160);
        assert!(outcome.stats.accepted_swaps <= outcome.stats.attempted_swaps);
    }

    #[test]
    fn test_remove_overlaps_shortens_convex_tour() {
        let inst = circle(12);
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(8);
        let outcome = remove_overlaps(&mut tour, 10, &mut rng).expect("runs");
        let baseline: f64 = outcome
            .moves
            .iter()
            .filter_map(|m| match m {
                crate::models::Move::Link { start, end, .. } => Some(inst.distance(*start, *end)),
                _ => None,
            })
            .sum();
        // on a convex set every uncrossing swap is a strict improvement
        assert!(tour.total_distance() <= baseline + 1e-9);
    }

    #[test]
    fn test_zero_passes_is_random_tour() {
        let inst = circle(8);
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(4);
        let outcome = remove_overlaps(&mut tour, 0, &mut rng).expect("runs");
        assert_eq!(outcome.stats.attempted_swaps, 0);
        assert_eq!(outcome.moves.len(), 8);
    }

    #[test]
    fn test_remove_overlaps_rejects_single_city() {
        let inst = TspInstance::new(vec![City::new(0, 0.0, 0.0)]).expect("non-empty");
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(1);
        assert!(matches!(
            remove_overlaps(&mut tour, 10, &mut rng),
            Err(TspError::DegenerateInput { .. })
        ));
    }
}
