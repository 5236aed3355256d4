//! `ring-engine` — the event-driven collision engine for `rust_ring`.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`state`]      | `RingState` (the agent ring), `AgentView` (frame output)  |
//! | [`transition`] | next-collision computation (`next_transition`)            |
//! | [`runtime`]    | `EngineRuntime` — tick loop, interpolation, auto-cycling  |
//! | [`observer`]   | `EngineObserver` callbacks, `NoopObserver`                |
//! | [`error`]      | `EngineError`, `EngineResult<T>`                          |
//!
//! # How the engine works
//!
//! Collisions are computed analytically, not stepped: from any state the
//! engine finds the adjacent opposite-direction pair with the smallest
//! directed gap, advances *every* agent by half that gap (all agents move
//! at unit speed for the same elapsed time), and flips the colliding
//! pair.  The pre- and post-collision states are then interpolated on a
//! normalized `phase` in [0, 1]; the phase rate `2 / min_gap` converts a
//! fixed real-time speed into "smaller gaps animate proportionally
//! faster", so agents always appear to move at constant velocity.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ring_core::EngineConfig;
//! use ring_engine::{EngineRuntime, NoopObserver};
//!
//! let mut engine = EngineRuntime::new(EngineConfig::default())?;
//! loop {
//!     engine.tick(0.02);                 // one 20 ms frame
//!     draw(&engine.positions());         // host-owned rendering
//! }
//! ```

pub mod error;
pub mod observer;
pub mod runtime;
pub mod state;
pub mod transition;


pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
pub use runtime::EngineRuntime;
pub use state::{AgentView, RingState};
pub use transition::{next_transition, Transition};
