//! Sampling context for particle generation.
//!
//! Wraps a per-particle RNG with the handful of range helpers the generator
//! needs, so the sampling code reads as intent rather than RNG plumbing.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Context for sampling one particle's parameters.
///
/// Each particle gets its own `SampleContext`, seeded from its index mixed
/// with the current clock. Within one batch, particles draw independently;
/// across calls, the clock term keeps the randomness live - two batches with
/// identical inputs will not repeat each other.
pub struct SampleContext {
    /// Index of the particle being sampled (0 to count-1).
    pub index: u32,
    /// Total number of particles in the batch.
    pub count: u32,
    rng: SmallRng,
}

impl SampleContext {
    /// Create a sampling context for one particle.
    pub(crate) fn new(index: u32, count: u32) -> Self {
        // Seed from index so particles in a batch differ even if the clock
        // read is identical, and from the clock so batches differ per call.
        let seed = index as u64
            ^ (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42));

        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in `[0.0, 1.0)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`. Returns `min` when the range is empty.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Random f32 in `[-amplitude, amplitude)`.
    ///
    /// Zero amplitude yields exactly 0.0 rather than panicking on an empty
    /// range, so a profile can switch sway off entirely.
    #[inline]
    pub fn random_signed(&mut self, amplitude: f32) -> f32 {
        self.random_range(-amplitude, amplitude)
    }

    /// Random angle in `[0, 360)` degrees.
    #[inline]
    pub fn random_degrees(&mut self) -> f32 {
        self.random_range(0.0, 360.0)
    }
}
