//! Genetic-algorithm solver for the travelling-salesperson problem.
//!
//! Evolves a population of candidate tours (permutations of cities) with
//! fitness-proportionate selection, ordered crossover and swap mutation.
//!
//! - [`Cities`]: the city set a tour is scored against; implement it for
//!   your own distance model or use [`EuclideanCities`]
//! - [`Tour`]: a visiting order and its genetic operators
//! - [`Population`]: one generation and [`advance_generation`](Population::advance_generation)
//! - [`TspRunner`]: a bounded generation loop with best-so-far tracking
//!
//! # Example
//!
//! ```
//! use u_tsp::{EuclideanCities, Population};
//!
//! let cities: EuclideanCities = "0 0\n1 0\n1 1\n0 1".parse().unwrap();
//! let mut population = Population::with_seed(&cities, 10, 0.05, 7);
//! for _ in 0..100 {
//!     population.advance_generation();
//! }
//! let best = population.best();
//! assert!(best.is_valid());
//! ```
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]; install a subscriber in the
//! application to see them.

pub mod cities;
pub mod error;
pub mod ga;
pub mod random;

pub use cities::{Cities, EuclideanCities, Point};
pub use error::{CitiesError, ConfigError};
pub use ga::{Population, Tour, TspConfig, TspResult, TspRunner};
