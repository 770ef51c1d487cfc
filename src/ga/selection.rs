//! Fitness-proportionate selection without replacement.
//!
//! [`RouletteWheel`] holds one weight per candidate. Each
//! [`take`](RouletteWheel::take) spins the wheel, removes the winner and
//! shrinks the running total, so later spins only see candidates not yet
//! chosen. Candidates are removed by swap-remove; the caller mirrors the
//! same `swap_remove` on its own storage to keep indices aligned.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Removals between exact recomputations of the cached total.
const RESYNC_INTERVAL: usize = 16;

/// A roulette wheel over strictly positive weights.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::RouletteWheel;
/// use u_tsp::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut wheel = RouletteWheel::new(vec![1.0, 2.0, 3.0]);
/// let mut picked = vec![wheel.take(&mut rng), wheel.take(&mut rng)];
/// assert_eq!(wheel.len(), 1);
/// picked.sort();
/// picked.dedup();
/// assert_eq!(picked.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    weights: Vec<f64>,
    total: f64,
    removals: usize,
}

impl RouletteWheel {
    /// Builds a wheel from candidate weights.
    ///
    /// # Panics
    /// Panics if any weight is not strictly positive and finite.
    pub fn new(weights: Vec<f64>) -> Self {
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            panic!("roulette weight {i} must be positive and finite, got {w}");
        }
        let total = weights.iter().sum();
        Self {
            weights,
            total,
            removals: 0,
        }
    }

    /// Number of candidates still on the wheel.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true once every candidate has been taken.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Cached sum of the remaining weights.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Remaining weights, in current index order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Spins the wheel and returns the winning index without removing it.
    ///
    /// Draws `r` uniformly from `[0, total)` and returns the first index
    /// whose running sum exceeds `r`.
    ///
    /// # Panics
    /// Panics if the wheel is empty, or if the walk runs past the last
    /// candidate, which means the cached total has drifted from the live
    /// sum of weights.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        assert!(!self.is_empty(), "cannot spin an empty roulette wheel");

        let threshold = rng.random_range(0.0..self.total);
        let mut cumulative = 0.0;
        for (i, &w) in self.weights.iter().enumerate() {
            cumulative += w;
            if cumulative > threshold {
                return i;
            }
        }

        panic!(
            "roulette wheel exhausted: draw {threshold} not reached by live sum {cumulative} \
             (cached total {}, {} candidates)",
            self.total,
            self.weights.len()
        );
    }

    /// Spins the wheel, removes the winner and returns its index.
    ///
    /// The index refers to positions *before* removal. The last candidate
    /// is moved into the freed slot.
    pub fn take<R: Rng>(&mut self, rng: &mut R) -> usize {
        let idx = self.spin(rng);
        self.remove(idx);
        idx
    }

    /// Removes a candidate by swap-remove and updates the running total.
    ///
    /// The total is recomputed exactly when the removed weight outweighs
    /// what is left, since the subtraction then loses most of its precision.
    pub fn remove(&mut self, idx: usize) -> f64 {
        let w = self.weights.swap_remove(idx);
        self.total -= w;
        self.removals += 1;
        if self.removals % RESYNC_INTERVAL == 0 || self.total <= 0.0 || self.total < w {
            self.resync();
        }
        w
    }

    /// Recomputes the cached total from the remaining weights.
    pub fn resync(&mut self) {
        self.total = self.weights.iter().sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_frequencies_match_weights() {
        let weights = vec![1.0, 2.0, 3.0, 4.0];
        let wheel = RouletteWheel::new(weights.clone());
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 40_000;
        for _ in 0..n {
            counts[wheel.spin(&mut rng)] += 1;
        }

        let total: f64 = weights.iter().sum();
        for (i, &c) in counts.iter().enumerate() {
            let expected = weights[i] / total;
            let observed = c as f64 / n as f64;
            assert!(
                (observed - expected).abs() < 0.015,
                "index {i}: expected {expected:.3}, observed {observed:.3} ({counts:?})"
            );
        }
    }

    #[test]
    fn test_take_is_without_replacement() {
        let mut rng = create_rng(9);
        for _ in 0..200 {
            let mut wheel = RouletteWheel::new(vec![0.5, 10.0, 0.1, 3.0, 7.0]);
            let mut ids: Vec<usize> = (0..5).collect();
            let mut picked = Vec::new();
            while !wheel.is_empty() {
                let idx = wheel.take(&mut rng);
                picked.push(ids.swap_remove(idx));
            }
            picked.sort_unstable();
            assert_eq!(picked, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_total_tracks_remaining_weights() {
        let mut rng = create_rng(1);
        let weights: Vec<f64> = (1..=100).map(|i| 1.0 / i as f64).collect();
        let mut wheel = RouletteWheel::new(weights);
        while wheel.len() > 1 {
            wheel.take(&mut rng);
            let live: f64 = wheel.weights().iter().sum();
            assert!(
                (wheel.total() - live).abs() <= 1e-12 * live.max(1.0),
                "cached total {} drifted from live sum {live}",
                wheel.total()
            );
        }
    }

    #[test]
    fn test_second_pick_proportional_among_remaining() {
        // After removing index 0, the remaining [1.0, 3.0] split 1:3.
        let mut rng = create_rng(77);
        let mut wheel = RouletteWheel::new(vec![5.0, 1.0, 3.0]);
        wheel.remove(0);
        // swap_remove moved index 2 (weight 3.0) into slot 0
        assert_eq!(wheel.weights(), &[3.0, 1.0]);

        let n = 20_000;
        let heavy = (0..n).filter(|_| wheel.spin(&mut rng) == 0).count();
        let freq = heavy as f64 / n as f64;
        assert!((freq - 0.75).abs() < 0.02, "expected ~0.75, got {freq}");
    }

    #[test]
    fn test_tiny_remainder_after_heavy_removals() {
        let mut rng = create_rng(5);
        let mut wheel = RouletteWheel::new(vec![0.1, 0.2, 1e-300]);
        wheel.remove(1);
        wheel.remove(0);
        assert_eq!(wheel.weights(), &[1e-300]);
        assert_eq!(wheel.total(), 1e-300);
        assert_eq!(wheel.take(&mut rng), 0);
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = create_rng(42);
        let mut wheel = RouletteWheel::new(vec![0.3]);
        assert_eq!(wheel.take(&mut rng), 0);
        assert!(wheel.is_empty());
        assert_eq!(wheel.total(), 0.0);
    }

    #[test]
    #[should_panic(expected = "roulette wheel exhausted")]
    fn test_drifted_total_fails_loudly() {
        let mut rng = create_rng(42);
        let mut wheel = RouletteWheel::new(vec![1.0, 1.0]);
        // Simulate a bookkeeping error: total far above the live sum.
        wheel.total = 1e9;
        for _ in 0..1000 {
            wheel.spin(&mut rng);
        }
    }

    #[test]
    #[should_panic(expected = "cannot spin an empty roulette wheel")]
    fn test_empty_wheel_panics() {
        let mut rng = create_rng(42);
        RouletteWheel::new(vec![]).spin(&mut rng);
    }

    #[test]
    #[should_panic(expected = "must be positive and finite")]
    fn test_rejects_zero_weight() {
        RouletteWheel::new(vec![1.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "must be positive and finite")]
    fn test_rejects_nan_weight() {
        RouletteWheel::new(vec![f64::NAN]);
    }
}
