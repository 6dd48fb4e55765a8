use serde::{Deserialize, Serialize};

use super::{ConfigError, Interval};

/// Per-episode wind sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// When false every episode is calm
    pub enabled: bool,
    pub speed: Interval,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: Interval::new(0.05, 0.2),
        }
    }
}

impl WindConfig {
    pub fn calm() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.speed.validate("wind.speed")?;
        if self.speed.min < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "wind.speed".to_string(),
                value: format!("{}", self.speed.min),
            });
        }
        Ok(())
    }
}
