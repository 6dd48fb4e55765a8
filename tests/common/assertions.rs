use approx::assert_relative_eq;
use lander::components::{DroneState, Observation};

/// Assert that every field of the drone state is finite
#[track_caller]
pub fn assert_state_valid(state: &DroneState) {
    assert!(state.position.x.is_finite(), "Position x is not finite");
    assert!(state.position.y.is_finite(), "Position y is not finite");
    assert!(state.velocity.x.is_finite(), "Velocity x is not finite");
    assert!(state.velocity.y.is_finite(), "Velocity y is not finite");
    assert!(state.rotation.is_finite(), "Rotation is not finite");
    assert!(
        state.angular_velocity.is_finite(),
        "Angular velocity is not finite"
    );
}

#[track_caller]
pub fn assert_state_eq(actual: &DroneState, expected: &DroneState, epsilon: f64) {
    assert_relative_eq!(actual.position, expected.position, epsilon = epsilon);
    assert_relative_eq!(actual.velocity, expected.velocity, epsilon = epsilon);
    assert_relative_eq!(actual.rotation, expected.rotation, epsilon = epsilon);
    assert_relative_eq!(
        actual.angular_velocity,
        expected.angular_velocity,
        epsilon = epsilon
    );
}

#[track_caller]
pub fn assert_observation_finite(observation: &Observation) {
    for (index, value) in observation.as_slice().iter().enumerate() {
        assert!(value.is_finite(), "Observation[{}] is not finite", index);
    }
}
