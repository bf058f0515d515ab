//! Nearest-neighbor tour construction.
//!
//! Starting from city 0, always move to the closest unvisited city, then
//! close the cycle. Ties go to the lowest city position.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use tracing::info;

use crate::error::{TspError, TspResult};
use crate::models::Tour;
use crate::strategy::{SearchOutcome, SearchStats, SearchStrategy};

use super::link;

/// Builds a tour with the nearest-neighbor heuristic.
///
/// Deterministic: no randomness is involved.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, Tour, TspInstance};
/// use tsp_search::constructive::nearest_neighbor_tour;
///
/// let instance = TspInstance::new(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ]).unwrap();
/// let mut tour = Tour::new(&instance);
///
/// let outcome = nearest_neighbor_tour(&mut tour).unwrap();
/// assert!((outcome.best_distance - 40.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_tour(tour: &mut Tour<'_>) -> TspResult<SearchOutcome> {
    let n = tour.len();
    if n == 0 {
        return Err(TspError::DegenerateInput {
            cities: 0,
            required: 1,
        });
    }
    info!(event = "strategy_start", strategy = "greedy", cities = n);

    tour.reset();
    let distances = tour.instance().distances();
    let mut moves = Vec::with_capacity(n);
    let mut remaining: Vec<usize> = (1..n).collect();

    let mut current = 0;
    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        if let Some(pos) = remaining.iter().position(|&c| c == next) {
            remaining.remove(pos);
        }
        link(tour, current, next, &mut moves);
        current = next;
    }
    link(tour, current, 0, &mut moves);

    tour.ensure_valid("greedy construction")?;
    tour.orient();

    let distance = tour.total_distance();
    let stats = SearchStats {
        iterations: n,
        ..SearchStats::default()
    };
    Ok(SearchOutcome::finish(
        SearchStrategy::Greedy,
        tour,
        distance,
        moves,
        stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, TspInstance};

    #[test]
    fn test_nn_square_perimeter() {
        let inst = TspInstance::new(vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 10.0),
            City::new(2, 10.0, 10.0),
            City::new(3, 10.0, 0.0),
        ])
        .expect("non-empty");
        let mut tour = Tour::new(&inst);
        let outcome = nearest_neighbor_tour(&mut tour).expect("valid");
        assert!(tour.is_valid());
        assert!((tour.total_distance() - 40.0).abs() < 1e-10);
        assert_eq!(outcome.saved.city_order(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let inst = TspInstance::new(vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 10.0, 0.0), // far
            City::new(2, 1.0, 0.0),  // near
        ])
        .expect("non-empty");
        let mut tour = Tour::new(&inst);
        let outcome = nearest_neighbor_tour(&mut tour).expect("valid");
        assert_eq!(outcome.saved.city_order(), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_line() {
        let inst = TspInstance::new((0..5).map(|i| City::new(i, i as f64, 0.0)).collect())
            .expect("non-empty");
        let mut tour = Tour::new(&inst);
        let outcome = nearest_neighbor_tour(&mut tour).expect("valid");
        // 0→1→2→3→4 then back 4
        assert!((outcome.best_distance - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_is_deterministic() {
        let inst = TspInstance::new(
            (0..30)
                .map(|i| City::new(i, ((i * 37) % 101) as f64, ((i * 59) % 103) as f64))
                .collect(),
        )
        .expect("non-empty");
        let mut a = Tour::new(&inst);
        let mut b = Tour::new(&inst);
        let oa = nearest_neighbor_tour(&mut a).expect("valid");
        let ob = nearest_neighbor_tour(&mut b).expect("valid");
        assert_eq!(oa.best_distance, ob.best_distance);
        assert_eq!(oa.moves, ob.moves);
    }

    #[test]
    fn test_nn_duplicate_cities() {
        let inst = TspInstance::new(vec![City::new(0, 2.0, 2.0), City::new(1, 2.0, 2.0)])
            .expect("non-empty");
        let mut tour = Tour::new(&inst);
        let outcome = nearest_neighbor_tour(&mut tour).expect("valid");
        assert!(tour.is_valid());
        assert_eq!(outcome.best_distance, 0.0);
    }
}
