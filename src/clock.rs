//! Host timestamps to frame times
//!
//! The host (display refresh, test harness, headless runner) supplies an
//! absolute timestamp per frame. The clock derives the delta and guarantees
//! it is never negative, so a host clock that jumps backwards stalls the
//! simulation for one frame instead of rewinding it.

/// Time information for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Monotonic current time (ms)
    pub now_ms: f64,
    /// Time since the previous frame (ms, >= 0)
    pub delta_ms: f64,
}

/// Turns a stream of host timestamps into [`FrameTime`]s
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `now_ms` (first frame gets a zero delta otherwise)
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            last_ms: Some(now_ms),
        }
    }

    /// Register a new host timestamp
    pub fn tick(&mut self, host_ms: f64) -> FrameTime {
        let now_ms = match self.last_ms {
            Some(last) => host_ms.max(last),
            None => host_ms,
        };
        let delta_ms = self.last_ms.map_or(0.0, |last| now_ms - last);
        self.last_ms = Some(now_ms);
        FrameTime { now_ms, delta_ms }
    }

    /// Most recent monotonic time, if any frame has been seen
    pub fn now_ms(&self) -> Option<f64> {
        self.last_ms
    }
}
