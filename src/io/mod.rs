pub mod log;
pub mod output;

pub use self::log::{parse_samples, read_samples, Samples};
pub use output::{write_step, write_steps};
