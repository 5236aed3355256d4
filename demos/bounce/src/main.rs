//! bounce — terminal driver for the rust_ring simulation.
//!
//! Plays the role of the rendering/glue layer the engine deliberately
//! leaves out: drives `tick` with fixed 20 ms frames, draws a coarse ASCII
//! strip of the loop, and records a CSV trace for offline plotting.

use std::path::Path;

use anyhow::Result;

use ring_core::EngineConfig;
use ring_engine::{AgentView, EngineObserver, EngineRuntime};
use ring_output::{CsvTraceWriter, EngineTraceObserver, TraceWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAMES: usize = 3_000;
const DT: f64 = 0.02; // 20 ms per frame, as the original render loop
const STRIP_WIDTH: usize = 64;
const DRAW_EVERY: usize = 125; // one strip per 2.5 s of host time
const TRACE_DIR: &str = "trace/bounce";

// ── Observer wrapper to count events ──────────────────────────────────────────

struct CountingObserver<W: TraceWriter> {
    inner: EngineTraceObserver<W>,
    collisions: usize,
    cycle_resets: usize,
}

impl<W: TraceWriter> CountingObserver<W> {
    fn new(inner: EngineTraceObserver<W>) -> Self {
        Self { inner, collisions: 0, cycle_resets: 0 }
    }
}

impl<W: TraceWriter> EngineObserver for CountingObserver<W> {
    fn wants_frames(&self) -> bool {
        true
    }

    fn on_frame(&mut self, global_time: f64, frame: &[AgentView]) {
        self.inner.on_frame(global_time, frame);
    }

    fn on_collision(&mut self, first_tag: u32, second_tag: u32, global_time: f64) {
        self.collisions += 1;
        self.inner.on_collision(first_tag, second_tag, global_time);
    }

    fn on_cycle_reset(&mut self, global_time: f64) {
        self.cycle_resets += 1;
        self.inner.on_cycle_reset(global_time);
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Draw the loop as a fixed-width strip, one character cell per bucket.
/// Agents print their tag digit; `>`/`<` would collide with multi-agent
/// cells, so direction is left to the trace.
fn draw_strip(views: &[AgentView]) -> String {
    let mut cells = vec!['.'; STRIP_WIDTH];
    for view in views {
        let cell = ((view.position * STRIP_WIDTH as f64) as usize).min(STRIP_WIDTH - 1);
        cells[cell] = char::from_digit(view.tag % 10, 10).unwrap_or('#');
    }
    cells.into_iter().collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = EngineConfig::default();
    println!("=== bounce — rust_ring ===");
    println!(
        "Agents: {}  |  Speed: {}  |  Seed: {}  |  Cycling: {}",
        config.population,
        config.speed,
        config.seed,
        config.cycle.is_some(),
    );
    println!();

    let mut engine = EngineRuntime::new(config)?;

    std::fs::create_dir_all(TRACE_DIR)?;
    let writer = CsvTraceWriter::new(Path::new(TRACE_DIR))?;
    let mut obs = CountingObserver::new(EngineTraceObserver::new(writer));

    for frame in 0..FRAMES {
        engine.tick_observed(DT, &mut obs);
        if frame % DRAW_EVERY == 0 {
            println!("t={:6.3}  [{}]", engine.global_time(), draw_strip(&engine.positions()));
        }
    }

    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("trace error: {e}");
    }

    // Summary.
    println!();
    println!("Frames: {}  |  Collisions: {}  |  Cycle resets: {}", FRAMES, obs.collisions, obs.cycle_resets);
    println!("Trace written to {TRACE_DIR}/");
    println!();

    println!("{:<6} {:<10} {:<10}", "Tag", "Position", "Direction");
    println!("{}", "-".repeat(28));
    for view in engine.positions() {
        println!("{:<6} {:<10.4} {:<10}", view.tag, view.position, view.orientation.to_string());
    }

    Ok(())
}
