// ---------------------------------------------------------------------------
// 1D car state: position and velocity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pub position: f64, // distance travelled
    pub velocity: f64, // distance per step
}

/// One emitted sample of a run: the state at the start of step `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub index: u64,
    pub position: f64,
    pub velocity: f64,
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub steps: u64,
    pub thrust: f64, // throttle in effect for the two calibration samples
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            steps: 5000,
            thrust: 0.1,
        }
    }
}
