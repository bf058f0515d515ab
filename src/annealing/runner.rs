//! Annealing loop.

use rand::Rng;
use tracing::{debug, info};

use crate::constructive::random_tour;
use crate::error::{TspError, TspResult};
use crate::models::{Move, Tour};
use crate::sampling::{sample_distinct_pair, weighted_coin_flip};
use crate::strategy::{SearchOutcome, SearchStats, SearchStrategy};

use super::AnnealingConfig;

/// Runs simulated annealing on `tour`, starting from a fresh random tour.
///
/// Reports the best distance seen. If the walk ends longer than that, the
/// best configuration is reapplied before returning.
///
/// # Errors
///
/// - [`TspError::InvalidConfig`] if the schedule fails validation
/// - [`TspError::DegenerateInput`] for fewer than 2 cities
/// - [`TspError::InvariantViolation`] if the tour is ever left broken
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, Tour, TspInstance};
/// use tsp_search::annealing::{simulated_annealing, AnnealingConfig, TemperaturePhase};
///
/// let instance = TspInstance::new(
///     (0..12).map(|i| City::new(i, (i * 7 % 12) as f64, (i * 5 % 12) as f64)).collect(),
/// ).unwrap();
/// let mut tour = Tour::new(&instance);
/// let config = AnnealingConfig::new(vec![TemperaturePhase::new(20.0, -0.05, 1.0)]);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let outcome = simulated_annealing(&mut tour, &config, &mut rng).unwrap();
/// assert!(tour.is_valid());
/// assert!(tour.total_distance() <= outcome.best_distance + 1e-9);
/// ```
pub fn simulated_annealing<R: Rng>(
    tour: &mut Tour<'_>,
    config: &AnnealingConfig,
    rng: &mut R,
) -> TspResult<SearchOutcome> {
    config.validate().map_err(TspError::InvalidConfig)?;
    let n = tour.len();
    if n < 2 {
        return Err(TspError::DegenerateInput {
            cities: n,
            required: 2,
        });
    }
    info!(
        event = "strategy_start",
        strategy = "simulated_annealing",
        cities = n,
        phases = config.phases.len(),
    );

    let baseline = random_tour(tour, rng)?;
    let mut moves = baseline.moves;
    let mut stats = SearchStats::default();

    let mut best_distance = tour.total_distance();
    let mut best_configuration = tour.to_configuration();

    for temperature in config.schedule() {
        stats.iterations += 1;
        let Some((e1, e2)) = sample_distinct_pair(n, rng) else {
            break;
        };

        let old_distance = tour.total_distance();
        stats.attempted_swaps += 1;
        if let Some(swap) = tour.attempt_two_swap(e1, e2) {
            stats.feasible_swaps += 1;
            let new_distance = tour.total_distance();
            let delta = new_distance - old_distance;

            if delta < 0.0 {
                stats.accepted_swaps += 1;
                stats.improving_swaps += 1;
                moves.push(swap.as_move());

                if new_distance < best_distance {
                    best_distance = new_distance;
                    best_configuration = tour.to_configuration();
                    debug!(event = "new_best", best_distance, temperature);
                }
            } else if weighted_coin_flip((-delta / temperature).exp(), rng) {
                stats.accepted_swaps += 1;
                moves.push(swap.as_move());
            } else {
                swap.reverse(tour);
                stats.reversed_swaps += 1;
            }
        }

        moves.push(Move::Temperature { value: temperature });
    }

    if tour.total_distance() > best_distance {
        tour.apply_configuration(&best_configuration)?;
        let restored = tour.total_distance();
        debug!(event = "restore_best", best_distance, restored);
        moves.push(Move::Restore { distance: restored });
    }

    tour.ensure_valid("simulated annealing")?;
    Ok(SearchOutcome::finish(
        SearchStrategy::SimulatedAnnealing,
        tour,
        best_distance,
        moves,
        stats,
    ))
}
