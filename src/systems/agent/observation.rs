use nalgebra::Vector2;

use crate::components::{DroneState, FootGeometry, Observation};

/// Assemble the policy observation from a fully integrated state
pub fn collect_observations(
    state: &DroneState,
    feet: &FootGeometry,
    target: &Vector2<f64>,
    area_origin: &Vector2<f64>,
) -> Observation {
    let relative = state.position - area_origin;
    let to_target = target - feet.midpoint(state);
    Observation([
        relative.x,
        relative.y,
        state.rotation,
        state.velocity.x,
        state.velocity.y,
        state.angular_velocity,
        to_target.x,
        to_target.y,
    ])
}
