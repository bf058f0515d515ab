//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::annealing::AnnealingConfig;
use crate::error::{TspError, TspResult};

/// Tuning knobs shared by all strategies.
///
/// Defaults reproduce the classic settings: 10 overlap-removal passes,
/// 3000 hill-climbing iterations and the three-phase annealing schedule.
///
/// # Examples
///
/// ```
/// use tsp_search::strategy::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_hill_climbing_iterations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.overlap_passes, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Passes over all edges made by overlap removal.
    pub overlap_passes: usize,

    /// Random swap attempts made by hill climbing.
    pub hill_climbing_iterations: usize,

    /// Temperature schedule for simulated annealing.
    pub annealing: AnnealingConfig,

    /// Random seed for reproducibility. Only used by [`solve`](super::solve).
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            overlap_passes: 10,
            hill_climbing_iterations: 3000,
            annealing: AnnealingConfig::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_overlap_passes(mut self, n: usize) -> Self {
        self.overlap_passes = n;
        self
    }

    pub fn with_hill_climbing_iterations(mut self, n: usize) -> Self {
        self.hill_climbing_iterations = n;
        self
    }

    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        self.annealing
            .validate()
            .map_err(|msg| TspError::InvalidConfig(format!("annealing: {msg}")))
    }
}
