pub mod config;

pub use config::{
    ConfigError, EnvironmentConfig, FlightConfig, Interval, PhysicsConfig, RewardConfig,
    SimulationConfig, WindConfig,
};
