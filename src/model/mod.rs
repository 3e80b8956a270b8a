pub mod coefficients;
pub mod throttle;

pub use coefficients::{estimate, Coefficients};
pub use throttle::{throttle, StepRamp, ThrottleProfile};
