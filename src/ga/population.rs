//! A generation of tours and the step that replaces it.
//!
//! [`Population::advance_generation`] runs one full cycle:
//!
//! 1. Weight every tour by its fitness relative to the generation's
//!    shortest tour
//! 2. Draw parents two at a time from a [`RouletteWheel`], without
//!    replacement, until fewer than two tours remain
//! 3. Mutate each parent with probability `mutation_rate`
//! 4. Recombine each pair by ordered crossover into two children
//! 5. Replace the old generation with the children
//!
//! Parents are moved out of the population as they are drawn and dropped
//! after recombination, so no tour is ever shared between generations.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::TspConfig;
use super::selection::RouletteWheel;
use super::tour::{fitness_from_distance, relative_fitness, Tour};
use crate::cities::Cities;
use crate::error::ConfigError;
use crate::random::{create_rng, TspRng};

/// A population of tours evolved one generation at a time.
///
/// The population owns its city set (pass `&cities` to borrow one), its
/// tours, and the random generator that drives every stochastic choice.
/// Two populations built with the same seed, cities and parameters evolve
/// identically.
///
/// # Odd sizes
///
/// Tours are paired for recombination. With an odd number of tours the
/// one left unpaired is dropped, so the population shrinks by one in that
/// generation and stays even afterwards.
///
/// # Examples
///
/// ```
/// use u_tsp::{EuclideanCities, Population};
///
/// let cities = EuclideanCities::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let mut population = Population::with_seed(&cities, 10, 0.1, 42);
/// for _ in 0..20 {
///     population.advance_generation();
/// }
/// assert_eq!(population.len(), 10);
/// assert!(population.best_distance() >= 4.0 - 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Population<C: Cities> {
    cities: C,
    individuals: Vec<Tour>,
    mutation_rate: f64,
    generation: usize,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
    rng: TspRng,
}

impl<C: Cities> Population<C> {
    /// Creates a population of `population_size` random tours with a
    /// random seed.
    ///
    /// `mutation_rate` is clamped to `[0, 1]`.
    pub fn new(cities: C, population_size: usize, mutation_rate: f64) -> Self {
        Self::with_seed(cities, population_size, mutation_rate, rand::random())
    }

    /// Creates a population of `population_size` random tours from a
    /// fixed seed.
    pub fn with_seed(cities: C, population_size: usize, mutation_rate: f64, seed: u64) -> Self {
        Self::with_rng(cities, population_size, mutation_rate, create_rng(seed))
    }

    /// Creates a population using a caller-provided generator.
    ///
    /// Each random tour is mutated once with probability `mutation_rate`.
    pub fn with_rng(
        cities: C,
        population_size: usize,
        mutation_rate: f64,
        mut rng: TspRng,
    ) -> Self {
        let mutation_rate = mutation_rate.clamp(0.0, 1.0);
        let n = cities.city_count();

        let individuals = (0..population_size)
            .map(|_| {
                let mut tour = Tour::random(n, &mut rng);
                if rng.random_range(0.0..1.0) < mutation_rate {
                    tour.mutate(&mut rng);
                }
                tour
            })
            .collect();

        debug!(
            cities = n,
            population_size, mutation_rate, "seeded initial population"
        );

        Self {
            cities,
            individuals,
            mutation_rate,
            generation: 0,
            parallel: false,
            rng,
        }
    }

    /// Creates a population from a validated configuration.
    pub fn from_config(cities: C, config: &TspConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut population = Self::with_seed(
            cities,
            config.population_size,
            config.mutation_rate,
            seed,
        );
        population.parallel = config.parallel;
        Ok(population)
    }

    /// Advances the population by one generation.
    ///
    /// Every current tour is either drawn as a parent or, for an odd
    /// population, dropped; the children replace them all.
    ///
    /// Roulette weights are [`relative_fitness`] against the shortest tour
    /// of the generation. They are proportional to each tour's
    /// [`fitness`](Tour::fitness), so selection odds are the same at any
    /// coordinate scale, and their sum stays finite even when every tour
    /// has zero length.
    ///
    /// # Panics
    /// Panics if roulette selection runs past the last candidate, which
    /// indicates the cached fitness total no longer matches the tours.
    pub fn advance_generation(&mut self) {
        let mut wheel = RouletteWheel::new(self.selection_weights());
        trace!(
            generation = self.generation,
            total_fitness = wheel.total(),
            "selecting parents"
        );

        let mut pool = std::mem::take(&mut self.individuals);
        let mut next = Vec::with_capacity(pool.len());

        while wheel.len() >= 2 {
            let mut first = pool.swap_remove(wheel.take(&mut self.rng));
            let mut second = pool.swap_remove(wheel.take(&mut self.rng));

            if self.rng.random_range(0.0..1.0) < self.mutation_rate {
                first.mutate(&mut self.rng);
            }
            if self.rng.random_range(0.0..1.0) < self.mutation_rate {
                second.mutate(&mut self.rng);
            }

            let (a, b) = first.recombine(&second, &mut self.rng);
            next.push(a);
            next.push(b);
        }

        if let Some(unpaired) = pool.pop() {
            debug!(
                generation = self.generation,
                distance = unpaired.distance(&self.cities),
                "dropping unpaired tour from odd-sized population"
            );
        }

        self.individuals = next;
        self.generation += 1;
    }

    /// Returns the tour with the shortest distance.
    ///
    /// Ties go to the tour that comes first in [`individuals`](Self::individuals).
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &Tour {
        &self.individuals[self.best_index().0]
    }

    /// Distance of [`best`](Self::best).
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best_distance(&self) -> f64 {
        self.best_index().1
    }

    /// [`best`](Self::best) and its distance from a single evaluation pass.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best_with_distance(&self) -> (&Tour, f64) {
        let (idx, distance) = self.best_index();
        (&self.individuals[idx], distance)
    }

    /// Sum of the fitness of every tour in the current generation.
    ///
    /// Saturates to infinity if several tours have zero length.
    pub fn total_fitness(&self) -> f64 {
        self.distances().into_iter().map(fitness_from_distance).sum()
    }

    /// Returns the current generation's tours.
    pub fn individuals(&self) -> &[Tour] {
        &self.individuals
    }

    /// Number of tours in the current generation.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns true if the population holds no tours.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Number of generations advanced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Per-parent mutation probability, after clamping.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// The city set the tours are evaluated against.
    pub fn cities(&self) -> &C {
        &self.cities
    }

    /// Index and distance of the shortest tour; the first one wins ties.
    fn best_index(&self) -> (usize, f64) {
        assert!(
            !self.individuals.is_empty(),
            "best() called on an empty population"
        );

        let distances = self.distances();
        let mut best = (0, distances[0]);
        for (i, &d) in distances.iter().enumerate().skip(1) {
            if d < best.1 {
                best = (i, d);
            }
        }
        best
    }

    fn selection_weights(&self) -> Vec<f64> {
        let distances = self.distances();
        let shortest = distances.iter().copied().fold(f64::INFINITY, f64::min);
        distances
            .into_iter()
            .map(|d| relative_fitness(d, shortest))
            .collect()
    }

    /// Distances of all tours, in population order.
    fn distances(&self) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return self
                .individuals
                .par_iter()
                .map(|tour| tour.distance(&self.cities))
                .collect();
        }

        self.individuals
            .iter()
            .map(|tour| tour.distance(&self.cities))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
