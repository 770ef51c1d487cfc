//! Tour chromosome: a visiting order over all cities.
//!
//! A [`Tour`] is a permutation of `0..n`. Every constructor and operator
//! keeps it one; a broken permutation is a bug and panics instead of
//! propagating into distance evaluation.

use rand::Rng;

use super::operators::{is_valid_permutation, order_crossover, order_crossover_at, swap_mutation};
use crate::cities::Cities;
use crate::random::random_permutation;

/// A candidate solution: the order in which cities are visited.
///
/// Fitness is not stored. It is derived from the order on every call to
/// [`fitness`](Tour::fitness), so a mutated tour can never report a stale
/// score.
///
/// # Examples
///
/// ```
/// use u_tsp::{Cities, EuclideanCities, Tour};
///
/// let cities = EuclideanCities::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let tour = Tour::from_order(vec![0, 1, 2, 3]);
/// assert_eq!(tour.distance(&cities), 4.0);
/// assert!(tour.fitness(&cities) > Tour::from_order(vec![0, 2, 1, 3]).fitness(&cities));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates a uniformly random tour over `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::from_order(random_permutation(n, rng))
    }

    /// Wraps an existing visiting order.
    ///
    /// # Panics
    /// Panics if `order` is not a permutation of `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Self {
        let tour = Self { order };
        tour.assert_valid();
        tour
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour and returns its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Returns the number of cities in this tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns true if the order is a permutation of `0..len()`.
    pub fn is_valid(&self) -> bool {
        is_valid_permutation(&self.order, self.order.len())
    }

    /// Swaps the cities at two distinct random positions.
    ///
    /// Tours with fewer than two cities are left untouched.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        swap_mutation(&mut self.order, rng);
        debug_assert!(self.is_valid(), "mutation corrupted tour: {:?}", self.order);
    }

    /// Produces two children by ordered crossover with `other`.
    ///
    /// The first child keeps `self`'s cities inside a random window and
    /// takes the rest in `other`'s order; the second child is the mirror
    /// image. Both parents are left untouched.
    ///
    /// # Panics
    /// Panics if the tours have different lengths.
    pub fn recombine<R: Rng>(&self, other: &Tour, rng: &mut R) -> (Tour, Tour) {
        let (a, b) = order_crossover(&self.order, &other.order, rng);
        (Tour { order: a }, Tour { order: b })
    }

    /// Ordered crossover with a fixed window `[b, e)`.
    ///
    /// An inverted pair is normalized; `b == e` gives an empty window.
    ///
    /// # Panics
    /// Panics if the tours have different lengths or a boundary is past
    /// the end.
    pub fn recombine_at(&self, other: &Tour, b: usize, e: usize) -> (Tour, Tour) {
        let (x, y) = order_crossover_at(&self.order, &other.order, b, e);
        (Tour { order: x }, Tour { order: y })
    }

    /// Round-trip length of this tour.
    pub fn distance<C: Cities + ?Sized>(&self, cities: &C) -> f64 {
        debug_assert_eq!(
            self.order.len(),
            cities.city_count(),
            "tour length does not match city count"
        );
        cities.tour_length(&self.order)
    }

    /// Fitness of this tour; higher is better.
    ///
    /// See [`fitness_from_distance`].
    pub fn fitness<C: Cities + ?Sized>(&self, cities: &C) -> f64 {
        fitness_from_distance(self.distance(cities))
    }

    fn assert_valid(&self) {
        assert!(
            self.is_valid(),
            "tour is not a permutation of 0..{}: {:?}",
            self.order.len(),
            self.order
        );
    }
}

/// Maps a tour distance to its fitness: `1 / distance`.
///
/// Scale-free, so halving every coordinate doubles every fitness and
/// leaves selection probabilities unchanged. Shorter tours get strictly
/// larger fitness as long as the two reciprocals round apart, which holds
/// for any distances differing beyond the last bits of precision. A
/// zero-length tour, or one so short that the reciprocal overflows, gets
/// `f64::MAX`, so the result is always positive and finite.
pub fn fitness_from_distance(distance: f64) -> f64 {
    (1.0 / distance).min(f64::MAX)
}

/// Fitness of a tour relative to the shortest tour it competes with.
///
/// `shortest / distance`, in `(0, 1]`: proportional to
/// [`fitness_from_distance`], so roulette probabilities are identical,
/// but a generation's total can never overflow. Tours as short as
/// `shortest` weigh exactly 1.
pub fn relative_fitness(distance: f64, shortest: f64) -> f64 {
    if distance <= shortest {
        return 1.0;
    }
    (shortest / distance).max(f64::MIN_POSITIVE)
}
