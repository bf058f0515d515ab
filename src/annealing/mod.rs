//! Simulated annealing over an edge-based tour.
//!
//! Starts from a random tour and walks a fixed temperature schedule. At
//! each temperature one random 2-opt swap is attempted; improving swaps
//! are kept, worsening ones survive with probability `exp(-delta / T)`.
//! The best layout seen is restored at the end if the walk drifted away
//! from it.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod schedule;

pub use config::{AnnealingConfig, TemperaturePhase};
pub use runner::simulated_annealing;
pub use schedule::TemperatureSchedule;
