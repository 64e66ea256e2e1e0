//! Rolling frame statistics.

/// A snapshot of the simulated pipeline's statistics.
///
/// Produced by the simulation clock once per tick and once per reset,
/// or merged in from an external frame feed. Consumers receive owned
/// copies; nothing here is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStats {
    /// Instantaneous frames per second derived from the last tick delta.
    pub fps: f64,
    /// Monotonically increasing frame counter. Only an explicit reset
    /// returns it to zero.
    pub frame_count: u64,
    /// Simulated per-frame processing time in milliseconds.
    pub processing_time_ms: f64,
    /// Display resolution formatted as `"WxH"`.
    pub resolution: String,
    /// Whether the simulation clock is currently running.
    pub simulating: bool,
}

impl FrameStats {
    /// Creates idle stats for the given resolution label.
    pub fn new(resolution: impl Into<String>) -> Self {
        Self {
            fps: 0.0,
            frame_count: 0,
            processing_time_ms: 0.0,
            resolution: resolution.into(),
            simulating: false,
        }
    }

    /// Zeroes the rolling values. Resolution and running state are kept.
    pub fn reset(&mut self) {
        self.fps = 0.0;
        self.frame_count = 0;
        self.processing_time_ms = 0.0;
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new("640x480")
    }
}
