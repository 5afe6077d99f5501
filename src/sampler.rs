//! Uniform random index sampling without replacement.

use rand::distributions::Uniform;
use rand::prelude::*;

/// Draws minimal-sample index sets uniformly at random, without replacement.
///
/// Collisions are resolved by resampling, which is cheap for the small sample
/// sizes typical of minimal solvers. The generator is owned by the sampler
/// (never process-global), so independent runs stay independently
/// reproducible.
#[derive(Debug)]
pub struct IndexSampler {
    rng: StdRng,
}

impl Default for IndexSampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IndexSampler {
    /// Construct with an entropy seed (suitable for production use).
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Construct with a fixed seed for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fill `out` with pairwise-distinct indices drawn uniformly from
    /// `[0, dataset_size)`.
    ///
    /// The caller guarantees `0 < out.len() <= dataset_size`; the driver
    /// validates this before the trial loop starts.
    pub fn draw(&mut self, dataset_size: usize, out: &mut [usize]) {
        debug_assert!(!out.is_empty() && out.len() <= dataset_size);

        let dist = Uniform::from(0..dataset_size);
        for i in 0..out.len() {
            loop {
                let candidate = self.rng.sample(&dist);
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
    }
}
