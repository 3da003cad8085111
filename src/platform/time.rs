//! Virtual-time clocks

use crate::consts::{FRAME_MS, MAX_FRAME_DT};

/// Emits one spawn signal per elapsed interval of virtual time
#[derive(Debug, Clone)]
pub struct SpawnClock {
    pub interval_ms: f64,
    accumulated_ms: f64,
}

impl SpawnClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0.0,
        }
    }

    /// Feed elapsed time; returns how many intervals completed
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if self.interval_ms <= 0.0 || elapsed_ms <= 0.0 {
            return 0;
        }
        self.accumulated_ms += elapsed_ms;
        let mut fired = 0;
        while self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            fired += 1;
        }
        fired
    }

    /// Restart the current interval
    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}

/// Turns host timestamps into frame-unit `dt`
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(dt in frames, elapsed ms)` since the previous call
    ///
    /// The first call counts as exactly one frame. Long stalls (tab in the
    /// background) are clamped so items don't teleport.
    pub fn tick(&mut self, now_ms: f64) -> (f32, f64) {
        let elapsed = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => FRAME_MS,
        };
        self.last_ms = Some(now_ms);
        let max_ms = MAX_FRAME_DT as f64 * FRAME_MS;
        let elapsed = elapsed.min(max_ms);
        ((elapsed / FRAME_MS) as f32, elapsed)
    }
}
