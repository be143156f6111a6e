//! Genetic search over delivery routes.
//!
//! The chromosome is a permutation of order indices; fitness is derived from
//! the route's total delay. Variation uses ordered crossover and swap
//! mutation, selection is fitness-proportionate, and elitism keeps the best
//! route alive across generations.

mod chromosome;
mod config;
mod engine;
mod operators;
mod population;

pub use chromosome::Chromosome;
pub use config::GaConfig;
pub use engine::{GaEngine, Generation, RunSummary, Termination};
pub use operators::{order_crossover, swap_mutation};
pub use population::Population;
