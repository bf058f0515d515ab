//! Random tour construction.

use rand::Rng;
use tracing::info;

use crate::error::{TspError, TspResult};
use crate::models::Tour;
use crate::strategy::{SearchOutcome, SearchStats, SearchStrategy};

use super::link;

/// Builds a tour by repeatedly connecting the current city to a uniformly
/// random unvisited one, then closing the cycle.
///
/// The starting city is random as well. After [`Tour::reset`] edge `i` is
/// anchored at city `i`, so each link sets the end of the current city's
/// own edge.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, Tour, TspInstance};
/// use tsp_search::constructive::random_tour;
///
/// let instance = TspInstance::new(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 0.0, 1.0),
/// ]).unwrap();
/// let mut tour = Tour::new(&instance);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let outcome = random_tour(&mut tour, &mut rng).unwrap();
/// assert!(tour.is_valid());
/// assert_eq!(outcome.moves.len(), 4);
/// ```
pub fn random_tour<R: Rng>(tour: &mut Tour<'_>, rng: &mut R) -> TspResult<SearchOutcome> {
    let n = tour.len();
    if n == 0 {
        return Err(TspError::DegenerateInput {
            cities: 0,
            required: 1,
        });
    }
    info!(event = "strategy_start", strategy = "random", cities = n);

    tour.reset();
    let mut moves = Vec::with_capacity(n);
    let mut remaining: Vec<usize> = (0..n).collect();

    let start = remaining.swap_remove(rng.random_range(0..n));
    let mut current = start;
    while !remaining.is_empty() {
        let next = remaining.swap_remove(rng.random_range(0..remaining.len()));
        link(tour, current, next, &mut moves);
        current = next;
    }
    link(tour, current, start, &mut moves);

    tour.ensure_valid("random construction")?;
    tour.orient();

    let distance = tour.total_distance();
    let stats = SearchStats {
        iterations: n,
        ..SearchStats::default()
    };
    Ok(SearchOutcome::finish(
        SearchStrategy::Random,
        tour,
        distance,
        moves,
        stats,
    ))
}
