pub mod environment;
pub mod flight;
pub mod interval;
pub mod physics;
pub mod reward;
pub mod simulation;
pub mod wind;

pub use environment::EnvironmentConfig;
pub use flight::FlightConfig;
pub use interval::Interval;
pub use physics::PhysicsConfig;
pub use reward::RewardConfig;
pub use simulation::SimulationConfig;
pub use wind::WindConfig;

use thiserror::Error;

use crate::physics::PhysicsError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Physics configuration error: {0}")]
    Physics(#[from] PhysicsError),
}
