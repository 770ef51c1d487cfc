//! Error types for caller-facing input validation.
//!
//! Broken invariants inside the genetic operators are not represented
//! here: a corrupted permutation or an exhausted roulette walk panics.

use thiserror::Error;

/// Invalid solver configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("mutation_rate must be a finite value in [0, 1], got {0}")]
    InvalidMutationRate(f64),
}

/// Failure to parse a city list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CitiesError {
    #[error("line {line}: invalid coordinate {token:?}")]
    InvalidCoordinate { line: usize, token: String },
    #[error("line {line}: coordinate {value} is not finite")]
    NonFinite { line: usize, value: f64 },
    #[error("odd number of coordinates: the last x value has no matching y")]
    DanglingCoordinate,
}
