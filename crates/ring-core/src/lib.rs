//! `ring-core` — foundational types for the `rust_ring` simulation.
//!
//! This crate is a dependency of every other `ring-*` crate.  It has no
//! `ring-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`config`] | `EngineConfig`, `CycleConfig`                 |
//! | [`rng`]    | `SimRng` (deterministic, seedable)            |
//! | [`error`]  | `CoreError`, `CoreResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CycleConfig, EngineConfig};
pub use error::{CoreError, CoreResult};
pub use rng::SimRng;
