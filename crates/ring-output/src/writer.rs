//! The `TraceWriter` trait implemented by backend writers.

use crate::{CollisionRow, FrameRow, OutputResult};

/// Sink for simulation trace rows.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored by [`EngineTraceObserver`][crate::EngineTraceObserver] and
/// retrieved with its `take_error`.
pub trait TraceWriter {
    /// Write one frame's batch of agent rows.
    fn write_frame(&mut self, rows: &[FrameRow]) -> OutputResult<()>;

    /// Write one collision row.
    fn write_collision(&mut self, row: &CollisionRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
