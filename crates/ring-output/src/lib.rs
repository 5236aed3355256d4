//! `ring-output` — simulation trace writers for `rust_ring`.
//!
//! The engine's observer callbacks are infallible, so writers follow a
//! stored-error pattern: failures are kept internally and retrieved with
//! [`EngineTraceObserver::take_error`] after the run.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`row`]      | `FrameRow`, `CollisionRow`                           |
//! | [`writer`]   | the `TraceWriter` trait                              |
//! | [`csv`]      | `CsvTraceWriter` — `frames.csv` + `collisions.csv`   |
//! | [`observer`] | `EngineTraceObserver<W>` bridging engine → writer    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ring_output::{CsvTraceWriter, EngineTraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = EngineTraceObserver::new(writer);
//! for _ in 0..frames {
//!     engine.tick_observed(dt, &mut obs);
//! }
//! obs.finish();
//! if let Some(e) = obs.take_error() { eprintln!("trace error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EngineTraceObserver;
pub use row::{CollisionRow, FrameRow};
pub use writer::TraceWriter;
