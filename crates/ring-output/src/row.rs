//! Plain data row types written by trace backends.

use ring_agent::Orientation;

/// One agent's interpolated state in one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    /// Frame counter, monotonic from 0 across cycle restarts.
    pub frame: u64,
    pub global_time: f64,
    pub tag: u32,
    /// Interpolated loop position in [0, 1).
    pub position: f64,
    pub orientation: Orientation,
}

/// One realized collision (an interpolation that completed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionRow {
    /// Frame counter at the moment the bounce became current state.
    pub frame: u64,
    pub global_time: f64,
    pub first_tag: u32,
    pub second_tag: u32,
}
