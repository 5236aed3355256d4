//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they need to propagate configuration
//! failures.

use thiserror::Error;

/// Errors raised while validating an [`EngineConfig`][crate::EngineConfig].
#[derive(Debug, Error)]
pub enum CoreError {
    /// A ring of fewer than 2 agents has no adjacent pair to collide.
    #[error("population {got} is too small: the ring needs at least 2 agents")]
    PopulationTooSmall { got: usize },

    #[error("speed {got} is invalid: must be finite and > 0")]
    InvalidSpeed { got: f64 },

    #[error("cycle window is invalid: wait {wait}, runtime {runtime} (need finite wait >= 0, runtime > 0)")]
    InvalidCycleWindow { wait: f64, runtime: f64 },
}

/// Shorthand result type for all `ring-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
