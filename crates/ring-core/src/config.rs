//! Engine configuration.
//!
//! The two observed deployments of the original simulation differ only in
//! configuration: one runs 5 sorted agents with automatic warm-up /
//! cool-down / restart cycling, the other 4 unsorted agents free-running
//! forever.  Both are expressed here as plain fields rather than two
//! hard-coded engines: `cycle: Option<CycleConfig>` and `sort_initial`.

use crate::{CoreError, CoreResult};

// ── CycleConfig ───────────────────────────────────────────────────────────────

/// Automatic run cycling: hold still for `wait` simulated time units, run
/// for `runtime`, hold for `wait` again, then restart with fresh agents.
///
/// All times are in *simulated* units (the same clock as
/// `EngineRuntime::global_time`), so wall-clock cycle length scales with
/// the configured speed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleConfig {
    /// Hold duration before the run starts and again after it ends.
    pub wait: f64,
    /// How long the agents actually move between the two holds.
    pub runtime: f64,
}

impl CycleConfig {
    /// Total simulated length of one cycle: `runtime + 2 * wait`.
    #[inline]
    pub fn total(&self) -> f64 {
        self.runtime + 2.0 * self.wait
    }

    /// `true` while `t` falls in the warm-up or cool-down hold window.
    ///
    /// During a hold the engine advances its clock but not the animation
    /// phase, so agents sit still on screen.
    #[inline]
    pub fn in_hold(&self, t: f64) -> bool {
        t <= self.wait || (t >= self.wait + self.runtime && t < self.total())
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Validated once by `EngineRuntime::new`; all later engine operations are
/// total functions over well-formed state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of agents on the ring.  Must be >= 2.
    pub population: usize,

    /// Simulated time units per wall-clock second.  The raw `dt` passed to
    /// `tick` is multiplied by this before anything else sees it.
    pub speed: f64,

    /// RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Sort the freshly randomized agents by position and re-number their
    /// tags by sorted index, so displayed labels read in ring order.
    pub sort_initial: bool,

    /// Automatic warm-up / cool-down / restart cycling.  `None` lets a run
    /// continue indefinitely.
    pub cycle: Option<CycleConfig>,
}

impl Default for EngineConfig {
    /// The reference configuration: 5 sorted agents cycling at speed 0.2
    /// with 0.8 holds around a 1.0 run.
    fn default() -> Self {
        Self {
            population: 5,
            speed: 0.2,
            seed: 42,
            sort_initial: true,
            cycle: Some(CycleConfig { wait: 0.8, runtime: 1.0 }),
        }
    }
}

impl EngineConfig {
    /// Check every field against its documented precondition.
    pub fn validate(&self) -> CoreResult<()> {
        if self.population < 2 {
            return Err(CoreError::PopulationTooSmall { got: self.population });
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(CoreError::InvalidSpeed { got: self.speed });
        }
        if let Some(cycle) = self.cycle {
            let ok = cycle.wait.is_finite()
                && cycle.wait >= 0.0
                && cycle.runtime.is_finite()
                && cycle.runtime > 0.0;
            if !ok {
                return Err(CoreError::InvalidCycleWindow {
                    wait: cycle.wait,
                    runtime: cycle.runtime,
                });
            }
        }
        Ok(())
    }
}
