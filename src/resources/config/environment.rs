use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::{ConfigError, Interval};

/// Training-area layout and episode rules.
///
/// All ranges are relative to `area_origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub area_origin: Vector2<f64>,

    /// Spawn ranges for a new episode
    pub spawn_x: Interval,
    pub spawn_y: Interval,
    /// [deg]
    pub spawn_rotation: Interval,
    pub spawn_velocity_x: Interval,
    pub spawn_velocity_y: Interval,

    /// Platform x range and fixed platform height
    pub target_x: Interval,
    pub target_y: f64,

    /// Episode ends when |x| exceeds this
    pub bounds_half_width: f64,
    /// Episode ends when y exceeds this
    pub ceiling: f64,

    /// Steps after reset during which contact is ignored
    pub grace_steps: u32,
    /// Optional truncation limit
    pub max_episode_steps: Option<u32>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            area_origin: Vector2::zeros(),
            spawn_x: Interval::symmetric(5.0),
            spawn_y: Interval::new(0.0, 3.0),
            spawn_rotation: Interval::symmetric(10.0),
            spawn_velocity_x: Interval::symmetric(1.0),
            spawn_velocity_y: Interval::new(-0.5, 1.0),
            target_x: Interval::symmetric(3.0),
            target_y: -1.0,
            bounds_half_width: 7.0,
            ceiling: 6.0,
            grace_steps: 5,
            max_episode_steps: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn with_origin(mut self, origin: Vector2<f64>) -> Self {
        self.area_origin = origin;
        self
    }

    /// World height of the platform surface
    pub fn target_height(&self) -> f64 {
        self.area_origin.y + self.target_y
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spawn_x.validate("spawn_x")?;
        self.spawn_y.validate("spawn_y")?;
        self.spawn_rotation.validate("spawn_rotation")?;
        self.spawn_velocity_x.validate("spawn_velocity_x")?;
        self.spawn_velocity_y.validate("spawn_velocity_y")?;
        self.target_x.validate("target_x")?;

        if !(self.bounds_half_width > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "bounds_half_width".to_string(),
                value: self.bounds_half_width.to_string(),
            });
        }
        if self.spawn_x.min < -self.bounds_half_width
            || self.spawn_x.max > self.bounds_half_width
            || self.spawn_y.max > self.ceiling
        {
            return Err(ConfigError::ValidationError(
                "spawn area must lie inside the episode bounds".to_string(),
            ));
        }
        if self.max_episode_steps == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_episode_steps".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EnvironmentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_spawn_outside_bounds_is_rejected() {
        let config = EnvironmentConfig {
            spawn_x: Interval::symmetric(8.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
