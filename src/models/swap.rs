//! 2-opt reconnection of two tour edges.
//!
//! # Algorithm
//!
//! Given `e1 = (a, b)` and `e2 = (c, d)`, a swap moves one endpoint of
//! `e1` onto `e2` and one endpoint of `e2` onto `e1`. The four candidates
//! are tried in this order:
//!
//! ```text
//! (a, c)   (b, d)   (a, d)   (b, c)
//! ```
//!
//! where `(x, y)` means "replace `x` with `y` in `e1`, and `y` with `x`
//! in `e2`". The first candidate that keeps a single Hamiltonian cycle is
//! kept; the others are undone. Edges sharing a city are never swapped.
//! The order is a fixed tie-break, not a search for the shortest result.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Edge, EdgeId, Move, Tour};

/// An executed 2-opt reconnection, kept so it can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoSwap {
    city1: usize,
    city2: usize,
    edge1: EdgeId,
    edge2: EdgeId,
}

impl TwoSwap {
    /// Describes moving `city2` onto `edge1` in place of `city1`, and
    /// `city1` onto `edge2` in place of `city2`.
    pub fn new(city1: usize, city2: usize, edge1: EdgeId, edge2: EdgeId) -> Self {
        Self {
            city1,
            city2,
            edge1,
            edge2,
        }
    }

    /// City leaving the first edge.
    pub fn city1(&self) -> usize {
        self.city1
    }

    /// City leaving the second edge.
    pub fn city2(&self) -> usize {
        self.city2
    }

    /// First edge.
    pub fn edge1(&self) -> EdgeId {
        self.edge1
    }

    /// Second edge.
    pub fn edge2(&self) -> EdgeId {
        self.edge2
    }

    fn execute(&self, edges: &mut [Edge]) {
        edges[self.edge1].replace_endpoint(self.city1, self.city2);
        edges[self.edge2].replace_endpoint(self.city2, self.city1);
    }

    fn undo(&self, edges: &mut [Edge]) {
        edges[self.edge1].replace_endpoint(self.city2, self.city1);
        edges[self.edge2].replace_endpoint(self.city1, self.city2);
    }

    /// Puts the swapped cities back on their original edges.
    ///
    /// Endpoints are matched by city, so the swap can be reversed even
    /// after the tour was re-oriented.
    pub fn reverse(&self, tour: &mut Tour<'_>) {
        self.undo(tour.edges_mut());
    }

    /// The move-log entry for this swap.
    pub fn as_move(&self) -> Move {
        Move::Swap {
            edge1: self.edge1,
            edge2: self.edge2,
            city1: self.city1,
            city2: self.city2,
        }
    }
}

impl Tour<'_> {
    /// Tries to reconnect `e1` and `e2`, keeping the first candidate that
    /// leaves the tour valid.
    ///
    /// Returns `None` when no candidate does (or the edges are the same or
    /// share a city); the tour is then unchanged. On success the tour is
    /// re-oriented along its new traversal.
    pub fn attempt_two_swap(&mut self, e1: EdgeId, e2: EdgeId) -> Option<TwoSwap> {
        if e1 == e2 {
            return None;
        }
        let first = *self.edge(e1);
        let second = *self.edge(e2);
        if first.shares_city(&second) {
            trace!(edge1 = e1, edge2 = e2, "edges share a city, swap skipped");
            return None;
        }

        let candidates = [
            TwoSwap::new(first.start(), second.start(), e1, e2),
            TwoSwap::new(first.end(), second.end(), e1, e2),
            TwoSwap::new(first.start(), second.end(), e1, e2),
            TwoSwap::new(first.end(), second.start(), e1, e2),
        ];

        for swap in candidates {
            swap.execute(self.edges_mut());
            if self.is_valid() {
                self.orient();
                trace!(edge1 = e1, edge2 = e2, city1 = swap.city1, city2 = swap.city2, "swap kept");
                return Some(swap);
            }
            swap.undo(self.edges_mut());
        }
        trace!(edge1 = e1, edge2 = e2, "no feasible reconnection");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, TspInstance};

    fn square() -> TspInstance {
        TspInstance::new(vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 10.0),
            City::new(2, 10.0, 10.0),
            City::new(3, 10.0, 0.0),
        ])
        .expect("non-empty")
    }

    #[test]
    fn test_swap_uncrosses_diagonals() {
        let inst = square();
        let mut tour = Tour::from_order(&inst, &[0, 2, 1, 3]).expect("valid");
        let before = tour.total_distance();
        // edge 0 = (0, 2), edge 2 = (1, 3): the two diagonals
        let swap = tour.attempt_two_swap(0, 2).expect("feasible");
        assert!(tour.is_valid());
        assert!(tour.total_distance() < before);
        assert!((tour.total_distance() - 40.0).abs() < 1e-10);
        let mut rng = u_numflow::random::create_rng(1);
        assert!(tour.intersect_conflicts(&mut rng).is_empty());
        // (start1, start2) and (end1, end2) both split the tour in two
        assert_eq!((swap.city1(), swap.city2()), (0, 3));
    }

    #[test]
    fn test_shared_city_is_infeasible() {
        let inst = square();
        let mut tour = Tour::from_order(&inst, &[0, 1, 2, 3]).expect("valid");
        let before = tour.edges().to_vec();
        assert!(tour.attempt_two_swap(0, 1).is_none());
        assert!(tour.attempt_two_swap(2, 2).is_none());
        assert_eq!(tour.edges(), &before[..]);
    }

    #[test]
    fn test_reverse_restores_endpoints() {
        let inst = square();
        let mut tour = Tour::from_order(&inst, &[0, 2, 1, 3]).expect("valid");
        let mut before: Vec<_> = tour.edges().iter().map(|e| e.undirected()).collect();
        before.sort_unstable();

        let swap = tour.attempt_two_swap(0, 2).expect("feasible");
        swap.reverse(&mut tour);

        let mut after: Vec<_> = tour.edges().iter().map(|e| e.undirected()).collect();
        after.sort_unstable();
        assert_eq!(before, after);
        assert!(tour.is_valid());
    }

    #[test]
    fn test_as_move() {
        let swap = TwoSwap::new(4, 7, 1, 3);
        assert_eq!(
            swap.as_move(),
            Move::Swap {
                edge1: 1,
                edge2: 3,
                city1: 4,
                city2: 7
            }
        );
    }
}
