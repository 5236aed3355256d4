//! `EngineTraceObserver<W>` — bridges `EngineObserver` to a `TraceWriter`.

use ring_engine::{AgentView, EngineObserver};

use crate::row::{CollisionRow, FrameRow};
use crate::writer::TraceWriter;
use crate::OutputError;

/// An [`EngineObserver`] that records every frame and collision to any
/// [`TraceWriter`] backend.
///
/// Frames are numbered monotonically across cycle restarts, so a trace of
/// an auto-cycling run stays totally ordered.  Write errors are stored
/// because observer callbacks have no return value; after the run, check
/// with [`take_error`][Self::take_error].
pub struct EngineTraceObserver<W: TraceWriter> {
    writer: W,
    frame: u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> EngineTraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frame: 0, last_error: None }
    }

    /// Frames recorded so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Flush the underlying writer (storing any error).
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> EngineObserver for EngineTraceObserver<W> {
    fn wants_frames(&self) -> bool {
        true
    }

    fn on_frame(&mut self, global_time: f64, frame: &[AgentView]) {
        let rows: Vec<FrameRow> = frame
            .iter()
            .map(|view| FrameRow {
                frame: self.frame,
                global_time,
                tag: view.tag,
                position: view.position,
                orientation: view.orientation,
            })
            .collect();

        let result = self.writer.write_frame(&rows);
        self.store_err(result);
        self.frame += 1;
    }

    fn on_collision(&mut self, first_tag: u32, second_tag: u32, global_time: f64) {
        let row = CollisionRow { frame: self.frame, global_time, first_tag, second_tag };
        let result = self.writer.write_collision(&row);
        self.store_err(result);
    }
}
