//! Generation loop execution.
//!
//! [`TspRunner`] drives a [`Population`] for a bounded number of
//! generations and keeps the best tour seen along the way. The population
//! itself has no elitism, so its current best can get worse between
//! generations; the runner's result never does.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::config::TspConfig;
use super::population::Population;
use super::tour::Tour;
use crate::cities::Cities;
use crate::error::ConfigError;

/// Result of a TSP optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult {
    /// The shortest tour found during the entire run.
    pub best: Tour,

    /// Round-trip length of `best`.
    pub best_distance: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best distance seen so far, for the initial population and after
    /// each generation.
    pub distance_history: Vec<f64>,
}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use u_tsp::{EuclideanCities, TspConfig, TspRunner};
///
/// let cities = EuclideanCities::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let config = TspConfig::default()
///     .with_population_size(10)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = TspRunner::run(&cities, &config).unwrap();
/// assert_eq!(result.distance_history.len(), 51);
/// ```
pub struct TspRunner;

impl TspRunner {
    /// Runs the GA on `cities`.
    pub fn run<C: Cities>(cities: C, config: &TspConfig) -> Result<TspResult, ConfigError> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best tour found so far.
    pub fn run_with_cancel<C: Cities>(
        cities: C,
        config: &TspConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TspResult, ConfigError> {
        let mut population = Population::from_config(cities, config)?;

        let (initial_best, mut best_distance) = population.best_with_distance();
        let mut best = initial_best.clone();
        let mut distance_history = Vec::with_capacity(config.max_generations.min(4096) + 1);
        distance_history.push(best_distance);

        let mut stagnation_counter = 0usize;
        let mut cancelled = false;
        let mut stagnated = false;

        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population.advance_generation();

            let (gen_tour, gen_best) = population.best_with_distance();
            if gen_best < best_distance {
                debug!(
                    generation = gen + 1,
                    previous = best_distance,
                    distance = gen_best,
                    "new best tour"
                );
                best = gen_tour.clone();
                best_distance = gen_best;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            distance_history.push(best_distance);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        let generations = population.generation();
        info!(
            generations,
            best_distance, stagnated, cancelled, "optimization finished"
        );

        Ok(TspResult {
            best,
            best_distance,
            generations,
            stagnated,
            cancelled,
            distance_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
