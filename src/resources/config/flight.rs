use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Drone geometry and force scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub gravity_scalar: f64,
    /// Multiplies every applied force
    pub time_scalar: f64,
    /// Scales the rotors' horizontal offset: 0 is pure lift, large is mostly torque
    pub torque_scalar: f64,
    /// Rotor attachment points in the body frame, before torque scaling
    pub left_rotor: Vector2<f64>,
    pub right_rotor: Vector2<f64>,
    /// Landing foot reference points in the body frame
    pub left_foot: Vector2<f64>,
    pub right_foot: Vector2<f64>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            gravity_scalar: 1.0,
            time_scalar: 10.0,
            torque_scalar: 0.25,
            left_rotor: Vector2::new(-0.5, 0.0),
            right_rotor: Vector2::new(0.5, 0.0),
            left_foot: Vector2::new(-0.35, -0.25),
            right_foot: Vector2::new(0.35, -0.25),
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("gravity_scalar", self.gravity_scalar),
            ("time_scalar", self.time_scalar),
            ("torque_scalar", self.torque_scalar),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        let points = [
            ("left_rotor", self.left_rotor),
            ("right_rotor", self.right_rotor),
            ("left_foot", self.left_foot),
            ("right_foot", self.right_foot),
        ];
        for (name, point) in points {
            if !point.iter().all(|v| v.is_finite()) {
                return Err(ConfigError::InvalidParameter {
                    name: name.to_string(),
                    value: format!("{:?}", point),
                });
            }
        }
        Ok(())
    }
}
