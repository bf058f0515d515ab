//! Strategy selection and the top-level run entry points.
//!
//! - [`SearchStrategy`] — Closed set of the five search procedures
//! - [`SearchConfig`] — Iteration counts, annealing schedule and seed
//! - [`SearchOutcome`] — Best distance, move log and counters of a run
//! - [`solve`] — Build a tour over an instance and run one strategy on it

mod config;
mod outcome;

pub use config::SearchConfig;
pub use outcome::{SearchOutcome, SearchStats};

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use u_numflow::random::create_rng;

use crate::annealing::simulated_annealing;
use crate::constructive::{nearest_neighbor_tour, random_tour};
use crate::error::{TspError, TspResult};
use crate::local_search::{hill_climbing, remove_overlaps};
use crate::models::{Tour, TspInstance};

/// The search procedures a caller can pick from.
///
/// Strategies hold no state between runs; each run resets the tour and
/// mutates it in place.
///
/// # Examples
///
/// ```
/// use tsp_search::strategy::SearchStrategy;
///
/// let s: SearchStrategy = "hill_climbing".parse().unwrap();
/// assert_eq!(s, SearchStrategy::HillClimbing);
/// assert_eq!(s.to_string(), "hill_climbing");
/// assert!(!s.is_constructive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Uniformly random tour.
    Random,
    /// Nearest-neighbor chain from city 0.
    Greedy,
    /// Random tour, then geometric uncrossing.
    RemoveOverlaps,
    /// Random tour, then strictly-improving random 2-opt.
    HillClimbing,
    /// Random tour, then 2-opt under a temperature schedule.
    SimulatedAnnealing,
}

impl SearchStrategy {
    /// Every strategy, in presentation order.
    pub const ALL: [SearchStrategy; 5] = [
        SearchStrategy::Random,
        SearchStrategy::Greedy,
        SearchStrategy::RemoveOverlaps,
        SearchStrategy::HillClimbing,
        SearchStrategy::SimulatedAnnealing,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Random => "random",
            SearchStrategy::Greedy => "greedy",
            SearchStrategy::RemoveOverlaps => "remove_overlaps",
            SearchStrategy::HillClimbing => "hill_climbing",
            SearchStrategy::SimulatedAnnealing => "simulated_annealing",
        }
    }

    /// Returns `true` for strategies that only build a tour.
    pub fn is_constructive(&self) -> bool {
        matches!(self, SearchStrategy::Random | SearchStrategy::Greedy)
    }

    /// Runs this strategy on `tour`, drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidConfig`] if `config` fails validation
    /// - [`TspError::DegenerateInput`] if a swap-based strategy gets fewer
    ///   than 2 cities
    /// - [`TspError::InvariantViolation`] if the tour ends up broken
    pub fn execute<R: Rng>(
        &self,
        tour: &mut Tour<'_>,
        config: &SearchConfig,
        rng: &mut R,
    ) -> TspResult<SearchOutcome> {
        config.validate()?;
        match self {
            SearchStrategy::Random => random_tour(tour, rng),
            SearchStrategy::Greedy => nearest_neighbor_tour(tour),
            SearchStrategy::RemoveOverlaps => remove_overlaps(tour, config.overlap_passes, rng),
            SearchStrategy::HillClimbing => {
                hill_climbing(tour, config.hill_climbing_iterations, rng)
            }
            SearchStrategy::SimulatedAnnealing => {
                simulated_annealing(tour, &config.annealing, rng)
            }
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_").replace(' ', "_");
        SearchStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| TspError::InvalidConfig(format!("unknown strategy '{s}'")))
    }
}

/// Builds a tour over `instance` and runs `strategy` on it.
///
/// The generator is seeded from `config.seed`, or randomly when unset.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, TspInstance};
/// use tsp_search::strategy::{solve, SearchConfig, SearchStrategy};
///
/// let instance = TspInstance::new(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ]).unwrap();
///
/// let (tour, outcome) = solve(&instance, SearchStrategy::Greedy, &SearchConfig::default()).unwrap();
/// assert!(tour.is_valid());
/// assert!((outcome.best_distance - 40.0).abs() < 1e-10);
/// ```
pub fn solve<'a>(
    instance: &'a TspInstance,
    strategy: SearchStrategy,
    config: &SearchConfig,
) -> TspResult<(Tour<'a>, SearchOutcome)> {
    let mut rng = match config.seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    };
    let mut tour = Tour::new(instance);
    let outcome = strategy.execute(&mut tour, config, &mut rng)?;
    Ok((tour, outcome))
}
