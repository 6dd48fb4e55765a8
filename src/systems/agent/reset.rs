use nalgebra::Vector2;
use rand::Rng;

use crate::components::DroneState;
use crate::resources::EnvironmentConfig;

/// Random start state inside the spawn box, with zero angular velocity
pub fn spawn_state<R: Rng + ?Sized>(config: &EnvironmentConfig, rng: &mut R) -> DroneState {
    let origin = config.area_origin;
    let position = Vector2::new(
        config.spawn_x.offset(origin.x).sample(rng),
        config.spawn_y.offset(origin.y).sample(rng),
    );
    let rotation = config.spawn_rotation.sample(rng);
    let velocity = Vector2::new(
        config.spawn_velocity_x.sample(rng),
        config.spawn_velocity_y.sample(rng),
    );
    DroneState::new(position, rotation, velocity, 0.0)
}

/// New platform x for the next episode
pub fn target_x<R: Rng + ?Sized>(config: &EnvironmentConfig, rng: &mut R) -> f64 {
    config.target_x.offset(config.area_origin.x).sample(rng)
}
