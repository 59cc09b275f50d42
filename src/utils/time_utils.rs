use std::time::{Duration, Instant};

/// Stopwatch for per-stage timings in the debug log.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed microseconds, restarting the stopwatch.
    pub fn lap_us(&mut self) -> u128 {
        let us = self.start.elapsed().as_micros();
        self.start = Instant::now();
        us
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
