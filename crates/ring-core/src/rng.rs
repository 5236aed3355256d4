//! Deterministic RNG wrapper.
//!
//! The engine draws every random quantity (initial positions and
//! orientations, including the re-draws when a cycle restarts) from a
//! single `SimRng` seeded from the config.  The same seed always produces
//! the same run, which is what makes the transition-level tests exact.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Owned by the `EngineRuntime`; all randomization flows through it.  If a
/// host drives several independent runtimes it gives each its own `SimRng`
/// (distinct seeds), so no synchronisation is ever needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
