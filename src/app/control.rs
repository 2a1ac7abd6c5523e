use std::time::Duration;

/// Fixed-step movement clock, detached from the graphics framerate.
/// Elapsed frame time is fed in with [`Control::register_elapsed`] and
/// [`Control::can_update`] is polled in a loop to run every tick that
/// has become due.
#[derive(Clone, Debug)]
pub struct Control {
    interval: f64, // secs
    // amount of time which ticks have not yet been
    // accounted for (will be included next time
    // this is done)
    remainder: f64, // secs
    ticks: u64,
}

impl Control {
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "move interval must be positive");
        Self {
            interval: interval.as_secs_f64(),
            remainder: 0.,
            ticks: 0,
        }
    }

    /// Total number of ticks performed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn register_elapsed(&mut self, elapsed: Duration) {
        self.remainder += elapsed.as_secs_f64();
    }

    // repeatedly called as while loop condition, consumes one interval
    // per call for as long as a full interval is available
    pub fn can_update(&mut self) -> bool {
        if self.remainder >= self.interval {
            self.remainder -= self.interval;
            self.ticks += 1;
            true
        } else {
            false
        }
    }
}
