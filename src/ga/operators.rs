//! Permutation operators for tour chromosomes.
//!
//! These operate on `&[usize]` city-index vectors. [`Tour`](super::Tour)
//! wraps them with its permutation invariant; they are public so the
//! operators can be reused and tested on raw orders.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985) — keeps one parent's window,
//!   fills the rest in the other parent's relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"

use rand::Rng;

// ============================================================================
// Validity
// ============================================================================

/// Returns `true` if `perm` is a permutation of `0..n`.
///
/// Every value must be strictly less than `n` and appear exactly once.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in perm {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// Draws a window `[b, e)` with [`crossover_window`] and builds both
/// children with [`order_crossover_at`].
///
/// Parents with fewer than two cities are returned as copies.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (b, e) = crossover_window(n, rng);
    order_crossover_at(parent1, parent2, b, e)
}

/// Order Crossover with an explicit window.
///
/// The boundaries are normalized first, so `(e, b)` behaves like `(b, e)`.
/// With `b == e` the window is empty and each child is a copy of the
/// other parent's order.
///
/// 1. Child 1 takes `parent1[b..e]` at the same positions
/// 2. The remaining positions, left to right, get `parent2`'s cities in
///    `parent2`'s order, skipping cities already in the window
/// 3. Child 2 is the same construction with the parents swapped
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths, if a boundary exceeds the
/// length, or if a child is not a valid permutation (which happens only
/// when a parent isn't one).
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    b: usize,
    e: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let (b, e) = if b <= e { (b, e) } else { (e, b) };
    assert!(e <= n, "crossover window [{b}, {e}) out of bounds for length {n}");

    let child1 = ox_build_child(parent1, parent2, b, e);
    let child2 = ox_build_child(parent2, parent1, b, e);

    (child1, child2)
}

/// Build one OX child: window from `template`, everything else from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], b: usize, e: usize) -> Vec<usize> {
    let n = template.len();
    let window = &template[b..e];

    let mut in_window = vec![false; n];
    for &city in window {
        in_window[city] = true;
    }

    let mut fill = donor.iter().copied().filter(|&city| !in_window[city]);

    let mut child = Vec::with_capacity(n);
    child.extend(fill.by_ref().take(b));
    child.extend_from_slice(window);
    child.extend(fill);

    assert!(
        is_valid_permutation(&child, n),
        "ordered crossover produced an invalid permutation: {child:?}"
    );
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the cities at two distinct random positions.
///
/// No-op for fewer than two cities.
///
/// # Complexity
/// O(1) expected
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = two_distinct_positions(n, rng);
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Draws two distinct positions in `0..n`, redrawing the second until
/// it differs from the first.
///
/// # Panics
/// Panics if `n < 2`.
pub fn two_distinct_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n);
    while a == b {
        b = rng.random_range(0..n);
    }
    (a, b)
}

/// Draws a crossover window `[b, e)` with `b < e < n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn crossover_window<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let (a, b) = two_distinct_positions(n, rng);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
