//! Genetic algorithm for the travelling-salesperson problem.
//!
//! One representation, one operator of each kind:
//!
//! - [`Tour`]: a permutation of city indices
//! - Selection: roulette wheel without replacement ([`RouletteWheel`])
//! - Crossover: ordered crossover, OX ([`operators::order_crossover`])
//! - Mutation: swap of two distinct positions ([`operators::swap_mutation`])
//!
//! # Key Types
//!
//! - [`Population`]: one generation of tours and the step to the next
//! - [`TspConfig`]: population and loop parameters
//! - [`TspRunner`]: runs the generation loop, returns a [`TspResult`]
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod tour;

pub use config::TspConfig;
pub use population::Population;
pub use runner::{TspResult, TspRunner};
pub use selection::RouletteWheel;
pub use tour::{fitness_from_distance, relative_fitness, Tour};
