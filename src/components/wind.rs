use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Episode-constant wind disturbance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    /// Unit direction, or zero when the sample had no direction
    pub direction: Vector2<f64>,
    /// Non-negative speed scalar
    pub speed: f64,
}

impl Default for WindState {
    fn default() -> Self {
        Self::calm()
    }
}

impl WindState {
    pub fn new(direction: Vector2<f64>, speed: f64) -> Self {
        Self { direction, speed }
    }

    pub fn calm() -> Self {
        Self {
            direction: Vector2::zeros(),
            speed: 0.0,
        }
    }

    /// Direction scaled by speed
    pub fn velocity(&self) -> Vector2<f64> {
        self.direction * self.speed
    }
}
