use crate::model::{Coefficients, StepRamp, ThrottleProfile};

use super::state::{State, Step};

// ---------------------------------------------------------------------------
// Simulation loop
// ---------------------------------------------------------------------------

/// Lazy run of the car model, yielding one [`Step`] per simulated step.
///
/// Each item is the state before that step's update, so the first item is
/// always `(0, 0.0, 0.0)`.
#[derive(Debug, Clone)]
pub struct Simulation<P> {
    coefficients: Coefficients,
    profile: P,
    state: State,
    next: u64,
    steps: u64,
}

impl<P: ThrottleProfile> Simulation<P> {
    fn new(steps: u64, coefficients: Coefficients, profile: P) -> Self {
        Self {
            coefficients,
            profile,
            state: State::default(),
            next: 0,
            steps,
        }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }
}

impl<P: ThrottleProfile> Iterator for Simulation<P> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.next >= self.steps {
            return None;
        }
        let index = self.next;
        let step = Step {
            index,
            position: self.state.position,
            velocity: self.state.velocity,
        };

        let throttle = self.profile.throttle(index);
        self.state.velocity = self.coefficients.next_velocity(self.state.velocity, throttle);
        self.state.position += self.state.velocity;
        self.next += 1;

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Simulate `steps` steps driven by a custom throttle profile.
pub fn simulate_with<P: ThrottleProfile>(
    steps: u64,
    coefficients: Coefficients,
    profile: P,
) -> Simulation<P> {
    Simulation::new(steps, coefficients, profile)
}

/// Simulate with the default step ramp (convenience wrapper).
pub fn simulate(steps: u64, coefficients: Coefficients) -> Simulation<StepRamp> {
    simulate_with(steps, coefficients, StepRamp::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
