//! The `EngineRuntime` — state ownership, tick loop, and interpolation.

use ring_agent::{directed_span, wrap_unit};
use ring_core::{EngineConfig, SimRng};

use crate::observer::{EngineObserver, NoopObserver};
use crate::state::{AgentView, RingState};
use crate::transition::next_transition;

// ── PendingTransition ─────────────────────────────────────────────────────────

/// A computed-but-not-yet-realized transition: the state being
/// interpolated toward, its phase rate, and the pair that will have
/// bounced once the interpolation completes.
#[derive(Clone, Debug)]
pub(crate) struct PendingTransition {
    pub(crate) state: RingState,
    pub(crate) rate: f64,
    pub(crate) collision: Option<(usize, usize)>,
}

// ── EngineRuntime ─────────────────────────────────────────────────────────────

/// One self-contained simulation instance.
///
/// The runtime exclusively owns both ring states and is their sole
/// mutator; the only outward surface is [`tick`][Self::tick] (and its
/// observed variant), [`positions`][Self::positions], and read accessors.
/// Multiple runtimes can be driven independently — nothing is shared.
///
/// Driving is cooperative and frame-based: the host calls `tick(dt)` then
/// `positions()` once per animation frame, strictly sequentially.  Both
/// are bounded O(population) computations; nothing blocks.
pub struct EngineRuntime {
    config: EngineConfig,
    rng: SimRng,

    /// The last fully-realized configuration.
    pub(crate) current: RingState,

    /// The transition being interpolated toward, or `None` right after a
    /// reset (the next tick computes it).
    pub(crate) target: Option<PendingTransition>,

    /// Interpolation progress from `current` toward the target, in [0, 1].
    pub(crate) phase: f64,

    /// Monotonic simulated clock; drives the auto-cycle windows.
    pub(crate) global_time: f64,
}

impl EngineRuntime {
    /// Validate `config`, seed the RNG, and build the initial ring.
    ///
    /// After construction `current` is populated, no target is pending,
    /// and the phase is 0.
    pub fn new(config: EngineConfig) -> crate::EngineResult<Self> {
        config.validate()?;
        let mut rng = SimRng::new(config.seed);
        let current = RingState::random(config.population, config.sort_initial, &mut rng);
        Ok(Self {
            config,
            rng,
            current,
            target: None,
            phase: 0.0,
            global_time: 0.0,
        })
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn current(&self) -> &RingState {
        &self.current
    }

    /// The state being interpolated toward, if one has been computed.
    #[inline]
    pub fn target(&self) -> Option<&RingState> {
        self.target.as_ref().map(|t| &t.state)
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn global_time(&self) -> f64 {
        self.global_time
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Re-randomize the ring and restart the clock.
    ///
    /// Called automatically at the end of each auto-cycle; hosts may also
    /// call it directly (e.g. on a key press).  Leaves `current`
    /// populated and no target pending.
    pub fn reset(&mut self) {
        self.current =
            RingState::random(self.config.population, self.config.sort_initial, &mut self.rng);
        self.target = None;
        self.phase = 0.0;
        self.global_time = 0.0;
    }

    /// Advance the simulation by `dt` seconds of host time.
    pub fn tick(&mut self, dt: f64) {
        self.tick_observed(dt, &mut NoopObserver);
    }

    /// [`tick`][Self::tick] with observer callbacks.
    pub fn tick_observed<O: EngineObserver>(&mut self, dt: f64, observer: &mut O) {
        // A completed interpolation realizes the pending transition: the
        // target becomes current and the pair's bounce is now fact.
        if self.phase >= 1.0 {
            if let Some(pending) = self.target.take() {
                if let Some((i, j)) = pending.collision {
                    observer.on_collision(
                        self.current.agents[i].tag,
                        self.current.agents[j].tag,
                        self.global_time,
                    );
                }
                self.current = pending.state;
            }
            self.phase = 0.0;
        }

        // Nothing pending (fresh runtime, post-swap, or post-reset):
        // compute the next collision.
        if self.target.is_none() {
            let t = next_transition(&self.current);
            self.target = Some(PendingTransition {
                state: t.state,
                rate: t.rate,
                collision: t.collision,
            });
        }

        let scaled = self.config.speed * dt;

        if let Some(cycle) = self.config.cycle {
            // Warm-up / cool-down hold: the clock runs, the animation
            // doesn't.
            if cycle.in_hold(self.global_time) {
                self.global_time += scaled;
                self.emit_frame(observer);
                return;
            }
            // A full cycle has elapsed: restart with fresh agents.
            if self.global_time >= cycle.total() {
                observer.on_cycle_reset(self.global_time);
                self.reset();
                let t = next_transition(&self.current);
                self.target = Some(PendingTransition {
                    state: t.state,
                    rate: t.rate,
                    collision: t.collision,
                });
            }
        }

        let rate = self.target.as_ref().map_or(1.0, |t| t.rate);
        self.phase = (self.phase + rate * scaled).min(1.0);
        self.global_time += scaled;

        self.emit_frame(observer);
    }

    // ── Frame output ──────────────────────────────────────────────────────

    /// Interpolated per-agent snapshot for the current phase, ring order
    /// preserved.
    ///
    /// Each agent travels the directed span from its current to its target
    /// position along its *current* orientation, scaled by the phase.  A
    /// zero raw separation counts as a full lap (the terminal free-run
    /// case), matching the collision-distance convention.  Pure and
    /// recomputed per call; with no target pending the current positions
    /// are returned as-is.
    pub fn positions(&self) -> Vec<AgentView> {
        self.current
            .agents
            .iter()
            .enumerate()
            .map(|(i, agent)| {
                let position = match &self.target {
                    None => agent.position,
                    Some(pending) => {
                        let span = directed_span(
                            agent.position,
                            pending.state.agents[i].position,
                            agent.orientation,
                        );
                        wrap_unit(agent.position + agent.orientation.signum() * span * self.phase)
                    }
                };
                AgentView { position, orientation: agent.orientation, tag: agent.tag }
            })
            .collect()
    }

    fn emit_frame<O: EngineObserver>(&self, observer: &mut O) {
        if observer.wants_frames() {
            observer.on_frame(self.global_time, &self.positions());
        }
    }
}
