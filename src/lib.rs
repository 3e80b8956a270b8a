pub mod cli;
pub mod error;
pub mod io;
pub mod model;
pub mod sim;

use std::io::Write;
use std::path::Path;

use tracing::info;

pub use error::{Error, Result};
pub use model::{estimate, throttle, Coefficients, StepRamp, ThrottleProfile};
pub use sim::{simulate, simulate_with, RunSummary, SimConfig, Step};

/// Fit the car model from the log at `path` and stream a full run to `out`.
pub fn run_log<W: Write>(path: &Path, config: &SimConfig, out: &mut W) -> Result<RunSummary> {
    let samples = io::read_samples(path)?;
    let coefficients = estimate(config.thrust, samples.x1, samples.x2)?;
    info!(
        power = coefficients.power,
        drag = coefficients.drag,
        top_speed = coefficients.top_speed(),
        "Fitted car model"
    );

    let sim = simulate(config.steps, coefficients);
    info!(steps = config.steps, profile = sim.profile().name(), "Simulating");

    let mut summary = RunSummary::default();
    io::write_steps(out, sim.inspect(|step| summary.observe(step)))?;
    out.flush()?;

    info!(
        steps = summary.steps,
        final_position = summary.final_position,
        peak_velocity = summary.peak_velocity,
        "Run complete"
    );
    Ok(summary)
}
