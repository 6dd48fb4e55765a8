mod lander;
mod vectorized;

pub use lander::{Environment, StepResult};
pub use vectorized::VecEnvironment;
