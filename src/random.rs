// Fri Oct 16 2026 - Alex

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Largest mean sampled in one Knuth pass; bigger means are split into chunks
/// so `exp(-mean)` never underflows.
const POISSON_CHUNK: f64 = 30.0;

/// The single seeded random source for a generation pass.
///
/// Every draw the generator makes goes through here, so for a given seed the
/// sequence of draws, and therefore the emitted program, is reproducible.
pub struct RandomStream {
    rng: StdRng,
}

impl RandomStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `1..=100`.
    pub fn percent(&mut self) -> u32 {
        self.rng.gen_range(1..=100)
    }

    /// Rolls a percentage; `0` never succeeds and `100` always does.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.percent() <= percent
    }

    /// Uniform `usize` in the inclusive range `[min, max]`.
    pub fn uniform(&mut self, min: usize, max: usize) -> usize {
        if max < min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform `u32` in the inclusive range `[min, max]`.
    pub fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
        if max < min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Poisson-distributed count with the given mean (Knuth's method).
    pub fn poisson(&mut self, mean: f64) -> u64 {
        if !(mean > 0.0) {
            return 0;
        }
        let mut remaining = mean;
        let mut total = 0;
        while remaining > 0.0 {
            let chunk = remaining.min(POISSON_CHUNK);
            remaining -= chunk;
            total += self.poisson_chunk(chunk);
        }
        total
    }

    fn poisson_chunk(&mut self, mean: f64) -> u64 {
        let limit = (-mean).exp();
        let mut product: f64 = self.rng.gen();
        let mut count = 0;
        while product > limit {
            count += 1;
            product *= self.rng.gen::<f64>();
        }
        count
    }

    /// A uniformly random permutation of `0..len`.
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = RandomStream::new(42);
        let mut b = RandomStream::new(42);
        for _ in 0..100 {
            assert_eq!(a.percent(), b.percent());
            assert_eq!(a.poisson(3.0), b.poisson(3.0));
        }
        assert_eq!(a.permutation(20), b.permutation(20));
    }

    #[test]
    fn test_percent_bounds() {
        let mut rng = RandomStream::new(1);
        for _ in 0..1000 {
            let p = rng.percent();
            assert!((1..=100).contains(&p));
        }
        assert!((0..100).all(|_| !rng.chance(0)));
        assert!((0..100).all(|_| rng.chance(100)));
    }

    #[test]
    fn test_uniform_bounds() {
        let mut rng = RandomStream::new(2);
        for _ in 0..1000 {
            let v = rng.uniform(3, 7);
            assert!((3..=7).contains(&v));
        }
        assert_eq!(rng.uniform(5, 5), 5);
        assert_eq!(rng.uniform(9, 2), 9);
    }

    #[test]
    fn test_poisson_mean_is_close() {
        let mut rng = RandomStream::new(3);
        let samples = 20_000;
        let sum: u64 = (0..samples).map(|_| rng.poisson(3.0)).sum();
        let mean = sum as f64 / samples as f64;
        assert!((mean - 3.0).abs() < 0.15, "mean was {}", mean);
        assert_eq!(rng.poisson(0.0), 0);
    }

    #[test]
    fn test_poisson_large_mean() {
        let mut rng = RandomStream::new(4);
        let samples = 2_000;
        let sum: u64 = (0..samples).map(|_| rng.poisson(100.0)).sum();
        let mean = sum as f64 / samples as f64;
        assert!((mean - 100.0).abs() < 2.0, "mean was {}", mean);
    }

    #[test]
    fn test_permutation_is_complete() {
        let mut rng = RandomStream::new(5);
        let mut perm = rng.permutation(50);
        perm.sort_unstable();
        assert_eq!(perm, (0..50).collect::<Vec<_>>());
        assert!(rng.permutation(0).is_empty());
    }
}
