//! Error types raised by tour construction and search.
//!
//! A rejected 2-opt reconnection is not an error: it surfaces as `None`
//! from [`Tour::attempt_two_swap`](crate::models::Tour::attempt_two_swap).

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TspResult<T> = Result<T, TspError>;

/// Errors raised while building instances or running search strategies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// The edge set no longer encodes a single Hamiltonian cycle.
    ///
    /// This signals a logic defect in a strategy and aborts the run.
    #[error("tour broken in {context}: traversal visited {visited} of {edges} edges")]
    InvariantViolation {
        /// Where the violation was detected.
        context: &'static str,
        /// Distinct edges reached by the traversal.
        visited: usize,
        /// Total number of edges in the tour.
        edges: usize,
    },
    /// A strategy that swaps edge pairs was given too few cities.
    #[error("{cities} cities supplied, at least {required} required")]
    DegenerateInput {
        /// Number of cities in the instance.
        cities: usize,
        /// Minimum number of cities the operation needs.
        required: usize,
    },
    /// An instance was created without any city.
    #[error("instance contains no cities")]
    EmptyInstance,
    /// An explicit distance matrix does not match the city list.
    #[error("distance matrix covers {matrix} locations but {cities} cities were given")]
    DistanceMismatch {
        /// Number of cities.
        cities: usize,
        /// Size of the supplied matrix.
        matrix: usize,
    },
    /// An explicit distance matrix is not symmetric.
    #[error("distance between {a} and {b} is not symmetric")]
    AsymmetricDistances {
        /// First city index.
        a: usize,
        /// Second city index.
        b: usize,
    },
    /// A configuration snapshot cannot be applied to this tour.
    #[error("configuration does not fit the tour: {0}")]
    ConfigurationMismatch(String),
    /// A search configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TspError {
    /// Returns `true` for errors that indicate a corrupted tour.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TspError::InvariantViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_message() {
        let err = TspError::InvariantViolation {
            context: "random construction",
            visited: 3,
            edges: 5,
        };
        assert_eq!(
            err.to_string(),
            "tour broken in random construction: traversal visited 3 of 5 edges"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_degenerate_input_not_fatal() {
        let err = TspError::DegenerateInput {
            cities: 1,
            required: 2,
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("at least 2"));
    }
}
