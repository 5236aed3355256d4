//! Engine observer trait for event reporting and frame capture.

use crate::AgentView;

/// Callbacks invoked by [`EngineRuntime::tick_observed`][crate::EngineRuntime::tick_observed]
/// at key points in the tick.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.  Frame capture is opt-in via
/// [`wants_frames`][Self::wants_frames] because building the interpolated
/// view costs an O(N) allocation per tick.
///
/// # Example — collision counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Collisions(usize);
///
/// impl EngineObserver for Collisions {
///     fn on_collision(&mut self, _a: u32, _b: u32, _t: f64) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Return `true` to receive [`on_frame`][Self::on_frame] every tick.
    fn wants_frames(&self) -> bool {
        false
    }

    /// Called once per tick with the interpolated per-agent views (ring
    /// order), when [`wants_frames`][Self::wants_frames] is `true`.
    fn on_frame(&mut self, _global_time: f64, _frame: &[AgentView]) {}

    /// Called when an interpolation completes and the colliding pair's
    /// bounce becomes part of the realized state.  Arguments are the two
    /// agents' display tags.
    fn on_collision(&mut self, _first_tag: u32, _second_tag: u32, _global_time: f64) {}

    /// Called just before an auto-cycle restart re-randomizes the ring.
    fn on_cycle_reset(&mut self, _global_time: f64) {}
}

/// An [`EngineObserver`] that does nothing.  `EngineRuntime::tick` uses it
/// so plain ticking needs no observer plumbing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
