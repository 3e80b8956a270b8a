// ---------------------------------------------------------------------------
// Throttle schedules
// ---------------------------------------------------------------------------

/// Trait for throttle schedules.
///
/// Implement this to drive the simulation loop with a custom schedule.
pub trait ThrottleProfile {
    /// Throttle fraction to apply at the given step.
    fn throttle(&self, step: u64) -> f64;

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Accelerate/coast pattern whose throttle ceiling rises every block.
///
/// Each block of `interval` steps runs at `(block + 1) / 10` throttle for its
/// first half and coasts for the second half. The level saturates at `cap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRamp {
    pub interval: u64, // steps per block
    pub cap: f64,      // highest throttle level
}

impl Default for StepRamp {
    fn default() -> Self {
        Self {
            interval: 10 * 60, // ten minutes of one-second steps
            cap: 0.7,
        }
    }
}

impl StepRamp {
    /// Throttle level for the block containing `step`, ignoring the coast half.
    ///
    /// A ramp with a zero interval has no blocks and never applies throttle.
    pub fn level(&self, step: u64) -> f64 {
        if self.interval == 0 {
            return 0.0;
        }
        // Unsigned division truncates, which is floor division for u64.
        let block = step / self.interval;
        ((block + 1) as f64 / 10.0).min(self.cap)
    }
}

impl ThrottleProfile for StepRamp {
    fn throttle(&self, step: u64) -> f64 {
        if self.interval == 0 {
            return 0.0;
        }
        if step % self.interval < self.interval / 2 {
            self.level(step)
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "step-ramp"
    }
}

/// Throttle of the default ramp at the given step.
pub fn throttle(step: u64) -> f64 {
    StepRamp::default().throttle(step)
}
