//! `ring-agent` — the agent model for the `rust_ring` simulation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`span`]  | unit-loop wrap and directed travel-distance arithmetic  |
//! | [`agent`] | `Agent`, `Orientation`, the pairwise collision distance |
//!
//! # The model
//!
//! An agent is a point on the closed unit loop [0, 1) travelling at unit
//! speed in one of two directions.  The only interaction between agents is
//! the head-on collision of two neighbours moving toward each other, which
//! the engine (ring-engine) detects with [`Agent::distance_to`].

pub mod agent;
pub mod span;


pub use agent::{Agent, Orientation};
pub use span::{directed_span, wrap_unit};
