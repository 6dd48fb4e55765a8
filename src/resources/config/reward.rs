use serde::{Deserialize, Serialize};

/// Reward constants for terminal and shaping rewards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Reward given when the drone leaves the training area
    pub out_of_bounds: f64,
    /// Flat bonus for any landing
    pub landing_bonus: f64,
    /// Numerator of the `k / (distance + 1)` accuracy bonus
    pub landing_accuracy: f64,
    /// Per degree of tilt at touchdown
    pub landing_tilt_penalty: f64,
    /// Per (m/s)^2 at touchdown
    pub landing_speed_penalty: f64,
    /// Per (rad/s)^2 at touchdown
    pub landing_spin_penalty: f64,
    /// Per degree of tilt on every non-terminal step
    pub tilt_penalty: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            out_of_bounds: -1000.0,
            landing_bonus: 1000.0,
            landing_accuracy: 500.0,
            landing_tilt_penalty: 0.25,
            landing_speed_penalty: 3.0,
            landing_spin_penalty: 3.0,
            tilt_penalty: 0.00001,
        }
    }
}
