//! Solver configuration.
//!
//! [`TspConfig`] holds the parameters of a population and of the
//! generation loop driven by [`TspRunner`](super::TspRunner).

use crate::error::ConfigError;

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::TspConfig;
///
/// let config = TspConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::TspConfig;
///
/// let config = TspConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TspConfig {
    /// Number of tours per generation.
    ///
    /// Should be even: with an odd size one unpaired tour is dropped every
    /// generation, so the population shrinks by one per generation.
    pub population_size: usize,

    /// Probability (0.0–1.0) of mutating a tour when the population is
    /// seeded, and of mutating each parent before recombination.
    pub mutation_rate: f64,

    /// Maximum number of generations the runner advances.
    pub max_generations: usize,

    /// Generations without a new best tour before the runner stops.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate tour distances in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Selection and the
    /// random stream stay sequential, so results do not depend on it.
    pub parallel: bool,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            max_generations: 500,
            stagnation_limit: 0,
            seed: None,
            parallel: false,
        }
    }
}

impl TspConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel distance evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TspConfig::default();
        assert_eq!(config.population_size, 100);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.stagnation_limit, 0);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TspConfig::default()
            .with_population_size(64)
            .with_mutation_rate(0.02)
            .with_max_generations(1000)
            .with_stagnation_limit(100)
            .with_seed(7)
            .with_parallel(true);

        assert_eq!(config.population_size, 64);
        assert!((config.mutation_rate - 0.02).abs() < 1e-10);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.stagnation_limit, 100);
        assert_eq!(config.seed, Some(7));
        assert!(config.parallel);
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(TspConfig::default().with_mutation_rate(1.5).mutation_rate, 1.0);
        assert_eq!(TspConfig::default().with_mutation_rate(-0.5).mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = TspConfig::default().with_population_size(1);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = TspConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_mutation_rate_set_directly() {
        let config = TspConfig {
            mutation_rate: f64::NAN,
            ..TspConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMutationRate(_))
        ));

        let config = TspConfig {
            mutation_rate: 1.2,
            ..TspConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMutationRate(1.2)));
    }

    #[test]
    fn test_odd_population_is_valid() {
        assert!(TspConfig::default().with_population_size(11).validate().is_ok());
    }
}
