use nalgebra::Vector2;

use crate::components::{DroneState, FootGeometry};
use crate::resources::RewardConfig;
use crate::utils::math::deg_to_rad;

/// Distance from the foot midpoint to the target
pub fn distance_to_target(state: &DroneState, feet: &FootGeometry, target: &Vector2<f64>) -> f64 {
    (target - feet.midpoint(state)).norm()
}

/// Terminal reward for leaving the training area
pub fn out_of_bounds_reward(config: &RewardConfig) -> f64 {
    config.out_of_bounds
}

/// Terminal reward for touching down.
///
/// Depends only on its arguments: closer, more level and gentler landings
/// score higher. `angular_velocity` is in deg/s and penalised in rad/s.
pub fn landing_reward(
    config: &RewardConfig,
    distance: f64,
    rotation_deg: f64,
    speed: f64,
    angular_velocity: f64,
) -> f64 {
    config.landing_bonus + config.landing_accuracy / (distance + 1.0)
        - config.landing_tilt_penalty * rotation_deg.abs()
        - config.landing_speed_penalty * speed.powi(2)
        - config.landing_spin_penalty * deg_to_rad(angular_velocity).powi(2)
}

/// Potential-based progress reward plus a small tilt penalty
pub fn shaping_reward(
    config: &RewardConfig,
    previous_distance: f64,
    current_distance: f64,
    rotation_deg: f64,
) -> f64 {
    (previous_distance - current_distance) - config.tilt_penalty * rotation_deg.abs()
}
