use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Landing platform position; x moves once per episode, y stays fixed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub position: Vector2<f64>,
}

impl TargetState {
    pub fn new(position: Vector2<f64>) -> Self {
        Self { position }
    }

    pub fn move_to_x(&mut self, x: f64) {
        self.position.x = x;
    }
}
