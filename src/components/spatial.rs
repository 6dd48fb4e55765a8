use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::math::rotate;

/// Rigid-body state of the drone in the world frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneState {
    /// Position of the body origin [m]
    pub position: Vector2<f64>,

    /// Orientation, counter-clockwise positive [deg]. Not wrapped to ±180.
    pub rotation: f64,

    /// Linear velocity [m/s]
    pub velocity: Vector2<f64>,

    /// Angular velocity, counter-clockwise positive [deg/s]
    pub angular_velocity: f64,
}

impl Default for DroneState {
    fn default() -> Self {
        Self {
            position: Vector2::zeros(),
            rotation: 0.0,
            velocity: Vector2::zeros(),
            angular_velocity: 0.0,
        }
    }
}

impl DroneState {
    pub fn new(
        position: Vector2<f64>,
        rotation: f64,
        velocity: Vector2<f64>,
        angular_velocity: f64,
    ) -> Self {
        Self {
            position,
            rotation,
            velocity,
            angular_velocity,
        }
    }

    /// Create a state at rest at a specific position
    pub fn at_position(position: Vector2<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Body +Y axis expressed in the world frame
    pub fn up(&self) -> Vector2<f64> {
        rotate(&Vector2::y(), self.rotation)
    }

    /// Transform a body-frame point into world coordinates
    pub fn to_world(&self, local: &Vector2<f64>) -> Vector2<f64> {
        self.position + rotate(local, self.rotation)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
            && self.rotation.is_finite()
            && self.angular_velocity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_up_follows_rotation() {
        let state = DroneState::new(Vector2::zeros(), -90.0, Vector2::zeros(), 0.0);
        let up = state.up();
        assert_relative_eq!(up.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(up.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_world_applies_translation_and_rotation() {
        let state = DroneState::new(Vector2::new(2.0, 1.0), 180.0, Vector2::zeros(), 0.0);
        let p = state.to_world(&Vector2::new(1.0, 0.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }
}
