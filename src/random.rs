//! Random number generation helpers.
//!
//! All randomized operations in this crate take a generic `R: Rng` so
//! callers can supply any generator. [`create_rng`] builds the seeded
//! generator used by [`Population`](crate::ga::Population) and the runner;
//! PCG-64 is portable and its stream is fixed for a given seed, which keeps
//! sequential runs byte-for-byte reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// The generator type owned by a population.
pub type TspRng = Pcg64;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> TspRng {
    Pcg64::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `0..n`.
///
/// Fisher–Yates shuffle: O(n), unbiased, no rejection sampling.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

/// Shuffles a slice in place (Fisher–Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_random_permutation_is_permutation() {
        let mut rng = create_rng(42);
        for n in [0, 1, 2, 5, 50] {
            let mut perm = random_permutation(n, &mut rng);
            perm.sort_unstable();
            assert_eq!(perm, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_random_permutation_unbiased_first_position() {
        // Each of the 4 values should land in position 0 about 1/4 of the time.
        let mut rng = create_rng(123);
        let mut counts = [0u32; 4];
        let trials = 20_000;
        for _ in 0..trials {
            let perm = random_permutation(4, &mut rng);
            counts[perm[0]] += 1;
        }
        for &c in &counts {
            let freq = c as f64 / trials as f64;
            assert!(
                (freq - 0.25).abs() < 0.02,
                "expected ~0.25 per value, got counts {counts:?}"
            );
        }
    }
}
