//! The city set a tour is evaluated against.
//!
//! The genetic core only needs two things from a city set: how many
//! cities there are, and the round-trip length of a visiting order. Both
//! are captured by the [`Cities`] trait. [`EuclideanCities`] is a
//! ready-made implementation over points in the plane.

use std::str::FromStr;

use crate::error::CitiesError;
use crate::ga::operators::is_valid_permutation;

/// A set of cities that can score a visiting order.
///
/// `Send + Sync` because distances may be evaluated from several threads
/// with the `parallel` feature.
///
/// # Implementing
///
/// ```
/// use u_tsp::Cities;
///
/// struct Line(usize);
///
/// impl Cities for Line {
///     fn city_count(&self) -> usize {
///         self.0
///     }
///
///     fn tour_length(&self, order: &[usize]) -> f64 {
///         // cities at 0, 1, 2, ... on a line
///         let n = order.len();
///         (0..n)
///             .map(|i| (order[i] as f64 - order[(i + 1) % n] as f64).abs())
///             .sum()
///     }
/// }
///
/// assert_eq!(Line(3).tour_length(&[0, 1, 2]), 4.0);
/// ```
pub trait Cities: Send + Sync {
    /// Number of cities. Tours are permutations of `0..city_count()`.
    fn city_count(&self) -> usize;

    /// Total length of the closed tour visiting cities in `order` and
    /// returning to the first one.
    ///
    /// `order` is always a valid permutation of `0..city_count()` when
    /// called from this crate. Must be non-negative.
    fn tour_length(&self, order: &[usize]) -> f64;
}

impl<C: Cities + ?Sized> Cities for &C {
    fn city_count(&self) -> usize {
        (**self).city_count()
    }

    fn tour_length(&self, order: &[usize]) -> f64 {
        (**self).tour_length(order)
    }
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Cities located in the plane, scored by Euclidean distance.
///
/// # Examples
///
/// ```
/// use u_tsp::{Cities, EuclideanCities};
///
/// let cities: EuclideanCities = "0 0\n1 0\n1 1\n0 1".parse().unwrap();
/// assert_eq!(cities.city_count(), 4);
/// assert_eq!(cities.tour_length(&[0, 1, 2, 3]), 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuclideanCities {
    points: Vec<Point>,
}

impl EuclideanCities {
    /// Wraps points, indexed by city id in the given order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the city coordinates, indexed by city id.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no cities.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a new city set listing the cities in visiting order.
    ///
    /// # Panics
    /// Panics if `order` is not a permutation of `0..len()`.
    pub fn reorder(&self, order: &[usize]) -> EuclideanCities {
        assert!(
            is_valid_permutation(order, self.len()),
            "reorder requires a permutation of 0..{}",
            self.len()
        );
        Self::new(order.iter().map(|&i| self.points[i]).collect())
    }
}

impl From<Vec<(f64, f64)>> for EuclideanCities {
    fn from(coords: Vec<(f64, f64)>) -> Self {
        Self::new(coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }
}

impl Cities for EuclideanCities {
    fn city_count(&self) -> usize {
        self.points.len()
    }

    fn tour_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        if n < 2 {
            return 0.0;
        }
        let closing = self.points[order[n - 1]].distance(&self.points[order[0]]);
        order
            .windows(2)
            .map(|w| self.points[w[0]].distance(&self.points[w[1]]))
            .sum::<f64>()
            + closing
    }
}

impl FromStr for EuclideanCities {
    type Err = CitiesError;

    /// Parses whitespace-separated `x y` coordinate pairs.
    ///
    /// Pairs may span or share lines; blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| CitiesError::InvalidCoordinate {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
                if !value.is_finite() {
                    return Err(CitiesError::NonFinite {
                        line: idx + 1,
                        value,
                    });
                }
                coords.push(value);
            }
        }

        if coords.len() % 2 != 0 {
            return Err(CitiesError::DanglingCoordinate);
        }

        Ok(Self::new(
            coords
                .chunks_exact(2)
                .map(|xy| Point::new(xy[0], xy[1]))
                .collect(),
        ))
    }
}
