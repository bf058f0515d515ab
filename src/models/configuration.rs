//! Tour snapshots.

use serde::{Deserialize, Serialize};

use super::TspInstance;

/// A snapshot of a tour: `(start, end)` city positions in traversal order.
///
/// Taken with [`Tour::to_configuration`](super::Tour::to_configuration)
/// and restored with [`Tour::apply_configuration`](super::Tour::apply_configuration).
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, Configuration, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
/// ]).unwrap();
/// let cfg = Configuration::new(vec![(0, 1), (1, 0)]);
/// assert_eq!(cfg.len(), 2);
/// assert!((cfg.distance(&instance) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pairs: Vec<(usize, usize)>,
}

impl Configuration {
    /// Creates a configuration from ordered `(start, end)` pairs.
    pub fn new(pairs: Vec<(usize, usize)>) -> Self {
        Self { pairs }
    }

    /// The ordered `(start, end)` pairs.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Number of edges captured.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// City positions in visiting order, starting from the first pair.
    pub fn city_order(&self) -> Vec<usize> {
        self.pairs.iter().map(|&(start, _)| start).collect()
    }

    /// Total length of the captured edges.
    pub fn distance(&self, instance: &TspInstance) -> f64 {
        self.pairs
            .iter()
            .map(|&(a, b)| instance.distance(a, b))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_order() {
        let cfg = Configuration::new(vec![(2, 0), (0, 1), (1, 2)]);
        assert_eq!(cfg.city_order(), vec![2, 0, 1]);
    }

    #[test]
    fn test_empty() {
        let cfg = Configuration::default();
        assert!(cfg.is_empty());
        assert!(cfg.city_order().is_empty());
    }
}
