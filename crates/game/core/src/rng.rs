//! Injected randomness.
//!
//! Crit rolls, enemy target picks, brood decisions and pray draws all go
//! through [`RngOracle`], so a battle is reproducible given the oracle.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

pub trait RngOracle {
    /// True with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..n`. `n` must be positive.
    fn pick(&mut self, n: usize) -> usize;

    /// `k` distinct indices from `0..n`, in draw order. `k <= n`.
    fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize>;
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }

    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }

    fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        (**self).sample_indices(n, k)
    }
}

/// `StdRng`-backed oracle.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl RngOracle for SeededRng {
    fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        self.inner.gen_bool(p.min(1.0))
    }

    fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "pick from an empty range");
        self.inner.gen_range(0..n)
    }

    fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        index::sample(&mut self.inner, n, k.min(n)).into_vec()
    }
}

/// Fully deterministic oracle: never crits, always picks index 0, samples
/// the first `k` indices, and answers `chance` from a fixed flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedRng {
    pub chance_result: bool,
}

impl FixedRng {
    pub const fn always(chance_result: bool) -> Self {
        Self { chance_result }
    }
}

impl RngOracle for FixedRng {
    fn chance(&mut self, p: f64) -> bool {
        self.chance_result && p > 0.0
    }

    fn pick(&mut self, _n: usize) -> usize {
        0
    }

    fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        (0..k.min(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = SeededRng::new(7);
        let mut b = SeededRng::new(7);
        let rolls_a: Vec<usize> = (0..16).map(|_| a.pick(10)).collect();
        let rolls_b: Vec<usize> = (0..16).map(|_| b.pick(10)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn sample_is_distinct_and_bounded() {
        let mut rng = SeededRng::new(3);
        let mut drawn = rng.sample_indices(6, 4);
        assert_eq!(drawn.len(), 4);
        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 4);
        assert!(drawn.iter().all(|&i| i < 6));
        assert_eq!(rng.sample_indices(2, 5).len(), 2);
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SeededRng::new(1);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
        assert!(!FixedRng::always(true).chance(0.0));
        assert!(FixedRng::always(true).chance(0.125));
    }
}
