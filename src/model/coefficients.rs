use tracing::debug;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Car model: v_next = drag * v + power * throttle
// ---------------------------------------------------------------------------

/// Power and drag of the linear car model, fitted from two log samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub power: f64, // velocity gained per unit throttle per step
    pub drag: f64,  // per-step velocity decay factor
}

/// Fit power and drag from the first two positions of a standing start.
///
/// The car starts at rest, so the position after one step is also the velocity
/// after one step (`v1 = x1`). The second velocity comes from the position
/// delta. Calibration assumes full thrust on the second step, which gives
/// `v2 = drag * v1 + x1`.
///
/// Drag is treated as linear in velocity. Real drag grows with `v^2`, which
/// together with log rounding leaves about 0.0003 of drift in a long run.
pub fn estimate(thrust: f64, x1: f64, x2: f64) -> Result<Coefficients> {
    if x1 == 0.0 {
        return Err(Error::ZeroFirstSample);
    }

    let power = x1 / thrust;
    let v2 = x2 - x1;
    let drag = (v2 - x1) / x1;

    debug!(thrust, x1, x2, power, drag, "Estimated car coefficients");
    Ok(Coefficients { power, drag })
}

impl Coefficients {
    /// Velocity after one step at the given throttle.
    pub fn next_velocity(&self, velocity: f64, throttle: f64) -> f64 {
        self.drag * velocity + self.power * throttle
    }

    /// Steady-state velocity at full throttle.
    ///
    /// Solves `v = drag * v + power`.
    pub fn top_speed(&self) -> f64 {
        self.power / (1.0 - self.drag)
    }

    /// Throttle that takes `current` to `target` in one step, clamped to [0, 1].
    pub fn throttle_for_speed(&self, target: f64, current: f64) -> f64 {
        ((target - self.drag * current) / self.power).clamp(0.0, 1.0)
    }

    /// Distance covered while coasting for `ticks` steps from `start_speed`.
    ///
    /// Sum of the geometric series `start_speed * drag^k` for k in 0..ticks.
    pub fn brake_distance(&self, start_speed: f64, ticks: u64) -> f64 {
        let decay = match i32::try_from(ticks) {
            Ok(n) => self.drag.powi(n),
            Err(_) => self.drag.powf(ticks as f64),
        };
        (1.0 - decay) / (1.0 - self.drag) * start_speed
    }

    /// Coasting steps needed to slow from `current` down to `target`.
    ///
    /// `None` when the model never decays (drag outside (0, 1)) or the target
    /// speed is not positive.
    pub fn ticks_to_slow_down(&self, current: f64, target: f64) -> Option<u64> {
        if target >= current {
            return Some(0);
        }
        if target <= 0.0 || self.drag <= 0.0 || self.drag >= 1.0 {
            return None;
        }
        // drag^n * current = target
        let ticks = ((target / current).ln() / self.drag.ln()).ceil();
        Some(ticks as u64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
