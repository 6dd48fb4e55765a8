use serde::{Deserialize, Serialize};

use crate::physics::PhysicsError;
use crate::utils::constants::{MAX_TIMESTEP, MIN_TIMESTEP};

/// Rigid-body and integration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed integration timestep [s]
    pub timestep: f64,
    pub mass: f64,
    /// Moment of inertia about the body origin
    pub inertia: f64,
    /// Velocity damping coefficients, applied as `v / (1 + dt * c)`
    pub linear_damping: f64,
    pub angular_damping: f64,
    pub max_velocity: f64,
    /// [deg/s]
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 0.02, // 50 Hz
            mass: 1.0,
            inertia: 0.1,
            linear_damping: 0.0,
            angular_damping: 0.05,
            max_velocity: 50.0,
            max_angular_velocity: 1440.0,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(MIN_TIMESTEP..=MAX_TIMESTEP).contains(&self.timestep) {
            return Err(PhysicsError::InvalidParameter(format!(
                "timestep {} outside [{}, {}]",
                self.timestep, MIN_TIMESTEP, MAX_TIMESTEP
            )));
        }
        let positive = [
            ("mass", self.mass),
            ("inertia", self.inertia),
            ("max_velocity", self.max_velocity),
            ("max_angular_velocity", self.max_angular_velocity),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.linear_damping < 0.0 || self.angular_damping < 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "damping must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
