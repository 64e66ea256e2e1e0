//! Processing-time sampling.
//!
//! The simulated per-frame processing time is drawn from an injectable
//! source so tests can supply a deterministic generator and assert
//! exact values.

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Lower bound of the simulated processing time, inclusive (ms).
pub const PROCESSING_TIME_MIN_MS: f64 = 5.0;
/// Upper bound of the simulated processing time, exclusive (ms).
pub const PROCESSING_TIME_MAX_MS: f64 = 25.0;

/// A source of simulated per-frame processing times.
pub trait ProcessingTimeSource: Send {
    /// Returns the processing time for the next frame, in milliseconds.
    fn sample_ms(&mut self) -> f64;
}

/// Default source: uniform samples from [5, 25) ms using ChaCha.
pub struct ChaChaSampler {
    rng: ChaCha8Rng,
}

impl ChaChaSampler {
    /// Creates a sampler seeded from the operating system.
    pub fn from_os_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a sampler with a fixed seed, for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ProcessingTimeSource for ChaChaSampler {
    fn sample_ms(&mut self) -> f64 {
        // Top 53 bits give a uniform float in [0, 1).
        let unit = (self.rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        PROCESSING_TIME_MIN_MS + unit * (PROCESSING_TIME_MAX_MS - PROCESSING_TIME_MIN_MS)
    }
}

/// Deterministic source returning one fixed value, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub f64);

impl ProcessingTimeSource for FixedSampler {
    fn sample_ms(&mut self) -> f64 {
        self.0
    }
}
