use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::DroneState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorSide {
    Left,
    Right,
}

impl fmt::Display for RotorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotorSide::Left => write!(f, "left"),
            RotorSide::Right => write!(f, "right"),
        }
    }
}

/// Body-frame rotor attachment points after torque scaling.
///
/// Built once per drone from the rotors' local positions; the x component is
/// multiplied by the torque scalar so that 0 gives pure vertical thrust and
/// large values make each rotor act mostly as a torque source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotorGeometry {
    left: Vector2<f64>,
    right: Vector2<f64>,
}

impl RotorGeometry {
    pub fn new(left_local: Vector2<f64>, right_local: Vector2<f64>, torque_scalar: f64) -> Self {
        Self {
            left: Vector2::new(left_local.x * torque_scalar, left_local.y),
            right: Vector2::new(right_local.x * torque_scalar, right_local.y),
        }
    }

    pub fn offset(&self, side: RotorSide) -> Vector2<f64> {
        match side {
            RotorSide::Left => self.left,
            RotorSide::Right => self.right,
        }
    }
}

/// Body-frame landing foot reference points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootGeometry {
    pub left: Vector2<f64>,
    pub right: Vector2<f64>,
}

impl FootGeometry {
    pub fn new(left: Vector2<f64>, right: Vector2<f64>) -> Self {
        Self { left, right }
    }

    /// World positions of both feet for the given body state
    pub fn world_positions(&self, state: &DroneState) -> [Vector2<f64>; 2] {
        [state.to_world(&self.left), state.to_world(&self.right)]
    }

    /// World position halfway between the feet
    pub fn midpoint(&self, state: &DroneState) -> Vector2<f64> {
        let [left, right] = self.world_positions(state);
        (left + right) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_torque_scalar_only_scales_x() {
        let geometry =
            RotorGeometry::new(Vector2::new(-0.5, 0.1), Vector2::new(0.5, 0.1), 0.25);
        assert_relative_eq!(geometry.offset(RotorSide::Left).x, -0.125);
        assert_relative_eq!(geometry.offset(RotorSide::Left).y, 0.1);
        assert_relative_eq!(geometry.offset(RotorSide::Right).x, 0.125);
    }

    #[test]
    fn test_zero_torque_scalar_centres_rotors() {
        let geometry = RotorGeometry::new(Vector2::new(-0.5, 0.1), Vector2::new(0.5, 0.1), 0.0);
        assert_eq!(geometry.offset(RotorSide::Left).x, 0.0);
        assert_eq!(geometry.offset(RotorSide::Right).x, 0.0);
    }

    #[test]
    fn test_foot_midpoint_rotates_with_body() {
        let feet = FootGeometry::new(Vector2::new(-0.4, -0.3), Vector2::new(0.4, -0.3));
        let level = DroneState::at_position(Vector2::new(1.0, 2.0));
        let mid = feet.midpoint(&level);
        assert_relative_eq!(mid.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 1.7, epsilon = 1e-12);

        let inverted = DroneState {
            rotation: 180.0,
            ..level
        };
        let mid = feet.midpoint(&inverted);
        assert_relative_eq!(mid.y, 2.3, epsilon = 1e-12);
    }
}
