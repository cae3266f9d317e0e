use std::time::{Duration, Instant};

/// Wall-clock delta between consecutive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    // When the previous frame started
    last: Instant,
    /// The total elapsed time since the timer was reset
    pub elapsed: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// Seconds since the previous call (or reset), advancing the timer.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        self.elapsed += delta;
        delta.as_secs_f32()
    }

    /// Restart timing from now, e.g. right before the first frame.
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.elapsed = Duration::ZERO;
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
