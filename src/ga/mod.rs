//! Genetic-algorithm roster engine.
//!
//! Searches the combinatorial space of slot assignments with a
//! steady-generation GA: fitness-proportionate selection, single-point
//! crossover over the shared slot sequence, slot-regeneration mutation,
//! elitism, and cross-generation best-ever tracking.
//!
//! # Encoding
//!
//! One gene per (shift, day) slot holding the chosen principal and
//! assistant set. The slot sequence is fixed per run, so crossover is a
//! positional tail swap and never needs repair.
//!
//! # Submodules
//!
//! - [`config`]: run parameters and their validation
//!
//! # References
//!
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

mod chromosome;
pub mod config;
mod fitness;
mod problem;
mod runner;
mod selection;

pub use chromosome::{single_point_crossover, slot_mutation, Gene, RosterChromosome};
pub use config::{ConfigError, GaParameters};
pub use fitness::FitnessWeights;
pub use problem::{RosterProblem, SlotInfo};
pub use runner::{GaOutcome, GaRunner};
pub use selection::roulette_select;
