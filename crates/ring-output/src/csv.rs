//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv` — one row per agent per frame
//! - `collisions.csv` — one row per realized collision

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{CollisionRow, FrameRow, OutputResult};

/// Writes the simulation trace to two CSV files.
pub struct CsvTraceWriter {
    frames: Writer<File>,
    collisions: Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record(["frame", "global_time", "tag", "position", "orientation"])?;

        let mut collisions = Writer::from_path(dir.join("collisions.csv"))?;
        collisions.write_record(["frame", "global_time", "first_tag", "second_tag"])?;

        Ok(Self { frames, collisions, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_frame(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.frame.to_string(),
                row.global_time.to_string(),
                row.tag.to_string(),
                row.position.to_string(),
                row.orientation.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_collision(&mut self, row: &CollisionRow) -> OutputResult<()> {
        self.collisions.write_record(&[
            row.frame.to_string(),
            row.global_time.to_string(),
            row.first_tag.to_string(),
            row.second_tag.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.collisions.flush()?;
        Ok(())
    }
}
