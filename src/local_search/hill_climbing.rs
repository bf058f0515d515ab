//! Random-restart-free 2-opt hill climbing.
//!
//! # Algorithm
//!
//! Build a random tour, then for a fixed number of iterations pick two
//! distinct edges uniformly at random and attempt a 2-opt swap. A swap is
//! kept only if the total distance strictly decreases; otherwise it is
//! reversed on the spot.
//!
//! # Complexity
//!
//! O(iterations · n): every attempt validates the tour in O(n).

use rand::Rng;
use tracing::info;

use crate::constructive::random_tour;
use crate::error::TspResult;
use crate::models::Tour;
use crate::sampling::sample_distinct_pair;
use crate::strategy::{SearchOutcome, SearchStats, SearchStrategy};

use super::require_pairs;

/// Improves a random tour by strictly-improving random 2-opt swaps.
///
/// The tour length never increases after the random construction.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, Tour, TspInstance};
/// use tsp_search::local_search::hill_climbing;
///
/// let instance = TspInstance::new(
///     (0..9).map(|i| City::new(i, (i % 3) as f64, (i / 3) as f64)).collect(),
/// ).unwrap();
/// let mut tour = Tour::new(&instance);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let outcome = hill_climbing(&mut tour, 3000, &mut rng).unwrap();
/// assert!(tour.is_valid());
/// assert_eq!(outcome.stats.iterations, 3000);
/// ```
pub fn hill_climbing<R: Rng>(
    tour: &mut Tour<'_>,
    iterations: usize,
    rng: &mut R,
) -> TspResult<SearchOutcome> {
    require_pairs(tour)?;
    let n = tour.len();
    info!(
        event = "strategy_start",
        strategy = "hill_climbing",
        cities = n,
        iterations,
    );

    let baseline = random_tour(tour, rng)?;
    let mut moves = baseline.moves;
    let mut stats = SearchStats::default();

    for _ in 0..iterations {
        stats.iterations += 1;
        let Some((e1, e2)) = sample_distinct_pair(n, rng) else {
            break;
        };

        let old_distance = tour.total_distance();
        stats.attempted_swaps += 1;
        let Some(swap) = tour.attempt_two_swap(e1, e2) else {
            continue;
        };
        stats.feasible_swaps += 1;

        if tour.total_distance() < old_distance {
            stats.accepted_swaps += 1;
            stats.improving_swaps += 1;
            moves.push(swap.as_move());
        } else {
            swap.reverse(tour);
            stats.reversed_swaps += 1;
        }
    }

    tour.ensure_valid("hill climbing")?;
    let distance = tour.total_distance();
    Ok(SearchOutcome::finish(
        SearchStrategy::HillClimbing,
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
    use crate::models::{City, Move, TspInstance};

    fn scattered(n: usize) -> TspInstance {
        let cities = (0..n)
            .map(|i| City::new(i, ((i * 37) % 97) as f64, ((i * 61) % 89) as f64))
            .collect();
        TspInstance::new(cities).expect("non-empty")
    }

    fn link_distance(inst: &TspInstance, moves: &[Move]) -> f64 {
        moves
            .iter()
            .filter_map(|m| match m {
                Move::Link { start, end, .. } => Some(inst.distance(*start, *end)),
                _ => None,
            })
            .sum()
    }

    #[test]
    fn test_hill_climbing_never_worsens() {
        let inst = scattered(25);
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(42);
        let outcome = hill_climbing(&mut tour, 3000, &mut rng).expect("runs");
        assert!(tour.is_valid());
        assert!(outcome.best_distance <= link_distance(&inst, &outcome.moves) + 1e-9);
        assert_eq!(outcome.stats.accepted_swaps, outcome.stats.improving_swaps);
        assert_eq!(
            outcome.stats.feasible_swaps,
            outcome.stats.accepted_swaps + outcome.stats.reversed_swaps
        );
    }

    #[test]
    fn test_swap_moves_are_strict_improvements() {
        let inst = scattered(12);
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(17);
        let outcome = hill_climbing(&mut tour, 500, &mut rng).expect("runs");
        let swaps = outcome
            .moves
            .iter()
            .filter(|m| matches!(m, Move::Swap { .. }))
            .count();
        assert_eq!(swaps, outcome.stats.improving_swaps);
    }

    #[test]
    fn test_hill_climbing_zero_iterations() {
        let inst = scattered(6);
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(2);
        let outcome = hill_climbing(&mut tour, 0, &mut rng).expect("runs");
        assert_eq!(outcome.stats, SearchStats::default());
        assert!(tour.is_valid());
    }

    #[test]
    fn test_hill_climbing_two_cities() {
        let inst = TspInstance::new(vec![City::new(0, 1.0, 1.0), City::new(1, 1.0, 1.0)])
            .expect("non-empty");
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(2);
        let outcome = hill_climbing(&mut tour, 50, &mut rng).expect("runs");
        assert!(tour.is_valid());
        assert_eq!(outcome.best_distance, 0.0);
        assert_eq!(outcome.stats.feasible_swaps, 0);
    }

    #[test]
    fn test_hill_climbing_rejects_single_city() {
        let inst = TspInstance::new(vec![City::new(0, 0.0, 0.0)]).expect("non-empty");
        let mut tour = Tour::new(&inst);
        let mut rng = u_numflow::random::create_rng(1);
        assert_eq!(
            hill_climbing(&mut tour, 10, &mut rng).unwrap_err(),
            TspError::DegenerateInput {
                cities: 1,
                required: 2
            }
        );
    }
}
