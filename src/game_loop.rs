use std::time::Instant;

/// Turns the frame driver's monotonic callbacks into per-frame delta time
/// in milliseconds. The first tick has no previous timestamp and reports a
/// zero baseline.
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => now.duration_since(last).as_secs_f32() * 1000.0,
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
