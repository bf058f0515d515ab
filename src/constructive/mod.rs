//! Constructive heuristics that build a tour from scratch.
//!
//! - [`random_tour`] — Uniformly random visiting order, O(n)
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor chain, O(n²)
//!
//! Both reset the tour first and fail with an invariant violation if the
//! result is not a single cycle.

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random::random_tour;

use crate::models::{Move, Tour};

/// Points edge `from` (still anchored at its origin) at city `to`.
fn link(tour: &mut Tour<'_>, from: usize, to: usize, moves: &mut Vec<Move>) {
    let edge = &mut tour.edges_mut()[from];
    edge.set_end(to);
    moves.push(Move::Link {
        edge: from,
        start: edge.start(),
        end: to,
    });
}
