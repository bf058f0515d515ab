//! Tour edge type.

use serde::{Deserialize, Serialize};

/// Index of an edge within its [`Tour`](super::Tour).
pub type EdgeId = usize;

/// One segment of a tour between two cities, stored by city position.
///
/// Every edge belongs to the city it was created for (its origin). A tour
/// holds exactly one edge per city for its whole lifetime; searches only
/// reassign endpoints.
///
/// # Examples
///
/// ```
/// use tsp_search::models::Edge;
///
/// let mut edge = Edge::new(3);
/// assert_eq!((edge.start(), edge.end()), (3, 3));
/// edge.set_endpoints(3, 5);
/// edge.flip();
/// assert_eq!((edge.start(), edge.end()), (5, 3));
/// edge.reset();
/// assert_eq!((edge.start(), edge.end()), (3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    origin: usize,
    start: usize,
    end: usize,
}

impl Edge {
    /// Creates a zero-length edge anchored at city `origin`.
    pub fn new(origin: usize) -> Self {
        Self {
            origin,
            start: origin,
            end: origin,
        }
    }

    /// Points both endpoints back at the origin city.
    pub fn reset(&mut self) {
        self.start = self.origin;
        self.end = self.origin;
    }

    /// The city this edge was created for.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Start city position.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End city position.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Reassigns both endpoints.
    pub fn set_endpoints(&mut self, start: usize, end: usize) {
        self.start = start;
        self.end = end;
    }

    /// Sets the end city.
    pub fn set_end(&mut self, end: usize) {
        self.end = end;
    }

    /// Swaps start and end.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Returns `true` if `city` is either endpoint.
    pub fn touches(&self, city: usize) -> bool {
        self.start == city || self.end == city
    }

    /// Returns `true` if the two edges have an endpoint in common.
    pub fn shares_city(&self, other: &Edge) -> bool {
        other.touches(self.start) || other.touches(self.end)
    }

    /// Replaces the first endpoint equal to `from` (start before end) with `to`.
    ///
    /// Returns `false` if neither endpoint is `from`.
    pub fn replace_endpoint(&mut self, from: usize, to: usize) -> bool {
        if self.start == from {
            self.start = to;
            true
        } else if self.end == from {
            self.end = to;
            true
        } else {
            false
        }
    }

    /// Endpoints with the smaller position first.
    pub fn undirected(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}
