use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    environment::EnvironmentConfig, flight::FlightConfig, physics::PhysicsConfig,
    reward::RewardConfig, wind::WindConfig, ConfigError,
};
use crate::utils::Result;

/// Complete configuration for one lander environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Master seed; drawn at random when absent
    pub seed: Option<u64>,
    pub physics: PhysicsConfig,
    pub flight: FlightConfig,
    pub wind: WindConfig,
    pub environment: EnvironmentConfig,
    pub reward: RewardConfig,
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from a YAML or JSON file, chosen by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_reader(file)?,
            _ => serde_yaml::from_reader(file)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.physics.validate()?;
        self.flight.validate()?;
        self.wind.validate()?;
        self.environment.validate()?;
        Ok(())
    }
}
