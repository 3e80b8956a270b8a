use super::state::Step;

/// Summary statistics accumulated while a run streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub final_position: f64,
    pub final_velocity: f64,
    pub peak_velocity: f64,
}

impl RunSummary {
    pub fn observe(&mut self, step: &Step) {
        self.steps += 1;
        self.final_position = step.position;
        self.final_velocity = step.velocity;
        self.peak_velocity = self.peak_velocity.max(step.velocity);
    }

    /// Compute summary from collected steps.
    pub fn from_steps<'a, I: IntoIterator<Item = &'a Step>>(steps: I) -> Self {
        let mut summary = Self::default();
        for step in steps {
            summary.observe(step);
        }
        summary
    }
}
