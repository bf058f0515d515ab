//! Domain model types for the travelling salesman search.
//!
//! Provides the core abstractions: immutable cities and the instance that
//! owns their distances, edges as reassignable city pairs, and the tour
//! that keeps those edges a single Hamiltonian cycle.

mod city;
mod configuration;
mod edge;
mod instance;
mod moves;
mod swap;
mod tour;

pub use city::City;
pub use configuration::Configuration;
pub use edge::{Edge, EdgeId};
pub use instance::TspInstance;
pub use moves::Move;
pub use swap::TwoSwap;
pub use tour::{Tour, TourStep, Traversal};
