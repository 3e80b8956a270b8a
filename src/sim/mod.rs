pub mod runner;
pub mod state;
pub mod summary;

pub use runner::{simulate, simulate_with, Simulation};
pub use state::{SimConfig, State, Step};
pub use summary::RunSummary;
