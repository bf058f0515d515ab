//! The read-only city list and distance table a search runs against.

use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};

use super::City;

/// An immutable TSP instance: cities plus their pairwise distances.
///
/// Loaded once before any search; every [`Tour`](super::Tour) borrows it.
///
/// # Examples
///
/// ```
/// use tsp_search::models::{City, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
/// ]).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert!((instance.distance(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(instance.distance(0, 1), instance.distance(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    cities: Vec<City>,
    distances: DistanceMatrix,
}

impl TspInstance {
    /// Creates an instance with Euclidean distances computed from coordinates.
    pub fn new(cities: Vec<City>) -> TspResult<Self> {
        if cities.is_empty() {
            return Err(TspError::EmptyInstance);
        }
        let distances = DistanceMatrix::from_cities(&cities);
        Ok(Self { cities, distances })
    }

    /// Creates an instance from an explicit, symmetric distance matrix.
    pub fn with_distances(cities: Vec<City>, distances: DistanceMatrix) -> TspResult<Self> {
        if cities.is_empty() {
            return Err(TspError::EmptyInstance);
        }
        if distances.size() != cities.len() {
            return Err(TspError::DistanceMismatch {
                cities: cities.len(),
                matrix: distances.size(),
            });
        }
        if let Some((a, b)) = distances.first_asymmetry(0.0) {
            return Err(TspError::AsymmetricDistances { a, b });
        }
        Ok(Self { cities, distances })
    }

    /// All cities, in load order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city at position `index`.
    pub fn city(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`; empty instances are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Distance between the cities at positions `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.distances.get(a, b)
    }

    /// The underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
