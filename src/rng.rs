// Random draws consumed by the photon walk.
//
// The walk only ever needs two kinds of draw: a normally distributed step
// length and uniformly distributed angles / decision variates. Both go
// through `RandomSource` so tests can substitute a scripted source and
// parallel drivers can hand each unit of work its own stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Capability providing the random draws used by the step generator.
pub trait RandomSource {
    /// Draw from a normal distribution with the given mean and standard deviation.
    ///
    /// A zero standard deviation returns `mean` exactly. No validation is
    /// performed on either argument.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Draw uniformly from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(self);
        mean + std_dev * z
    }

    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.gen::<f64>()
    }
}

/// Reproducible generator for one independent unit of work.
///
/// Every `(seed, stream)` pair yields a distinct ChaCha keystream, so work
/// split across threads draws statistically independent numbers no matter
/// how it is scheduled.
pub fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_normal_with_zero_std_dev_is_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(rng.normal(3.5, 0.0), 3.5);
        }
    }

    #[test]
    fn test_normal_sample_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.normal(10.0, 10.0)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 10.0).abs() < 0.5, "mean = {}", mean);
        assert!((var.sqrt() - 10.0).abs() < 0.5, "std = {}", var.sqrt());
    }

    #[test]
    fn test_normal_can_be_negative() {
        // Mean equal to the standard deviation leaves ~16% of draws below zero.
        let mut rng = StdRng::seed_from_u64(3);
        let negatives = (0..1000).filter(|_| rng.normal(1.0, 1.0) < 0.0).count();
        assert!(negatives > 0);
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let two_pi = 2.0 * std::f64::consts::PI;
        for _ in 0..10_000 {
            let v = rng.uniform(0.0, two_pi);
            assert!(v >= 0.0 && v < two_pi, "Value {} out of range [0, 2pi)", v);
        }
    }

    #[test]
    fn test_stream_rng_deterministic() {
        let mut a = stream_rng(12345, 3);
        let mut b = stream_rng(12345, 3);
        for _ in 0..100 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn test_stream_rng_streams_differ() {
        let mut a = stream_rng(12345, 0);
        let mut b = stream_rng(12345, 1);
        let xs: Vec<f64> = (0..10).map(|_| a.uniform(0.0, 1.0)).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.uniform(0.0, 1.0)).collect();
        assert_ne!(xs, ys);
    }
}
