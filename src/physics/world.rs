use crate::components::DroneState;
use crate::physics::{ForceSystem, PhysicsError};
use crate::resources::PhysicsConfig;
use crate::utils::math::rad_to_deg;

/// Rigid-body integrator for the drone.
///
/// `step` is a pure function of the previous state and the forces accumulated
/// for this tick; it never keeps state of its own between calls.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    config: PhysicsConfig,
}

impl PhysicsWorld {
    pub fn new(config: PhysicsConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn timestep(&self) -> f64 {
        self.config.timestep
    }

    /// Advance one timestep with semi-implicit Euler.
    ///
    /// Velocities are updated from the net force and torque first, then the
    /// pose is advanced with the new velocities. Torque is taken about the body
    /// origin, which is also the centre of mass.
    pub fn step(
        &self,
        state: &DroneState,
        forces: &ForceSystem,
    ) -> Result<DroneState, PhysicsError> {
        let dt = self.config.timestep;

        // Linear velocity from net force, then damping
        let acceleration = forces.net_force() / self.config.mass;
        let mut velocity = state.velocity + acceleration * dt;
        velocity /= 1.0 + dt * self.config.linear_damping;

        // Torque / inertia is rad/s^2; state carries deg/s
        let angular_acceleration = forces.net_torque(&state.position) / self.config.inertia;
        let mut angular_velocity = state.angular_velocity + rad_to_deg(angular_acceleration) * dt;
        angular_velocity /= 1.0 + dt * self.config.angular_damping;

        let (velocity, angular_velocity) = apply_velocity_limits(
            velocity,
            angular_velocity,
            self.config.max_velocity,
            self.config.max_angular_velocity,
        );

        // Pose advances with the updated velocities
        let next = DroneState {
            position: state.position + velocity * dt,
            rotation: state.rotation + angular_velocity * dt,
            velocity,
            angular_velocity,
        };

        if !next.is_finite() {
            return Err(PhysicsError::ComputationError(format!(
                "Non-finite state after integration: {:?}",
                next
            )));
        }

        Ok(next)
    }
}

/// Clamp linear speed and angular rate magnitudes
fn apply_velocity_limits(
    mut velocity: nalgebra::Vector2<f64>,
    angular_velocity: f64,
    max_velocity: f64,
    max_angular_velocity: f64,
) -> (nalgebra::Vector2<f64>, f64) {
    let speed = velocity.norm();
    if speed > max_velocity {
        velocity *= max_velocity / speed;
    }
    (
        velocity,
        angular_velocity.clamp(-max_angular_velocity, max_angular_velocity),
    )
}
