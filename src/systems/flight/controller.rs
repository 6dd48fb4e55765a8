use nalgebra::Vector2;

use crate::components::{DroneState, RotorGeometry, RotorSide, WindState};
use crate::physics::{ForceCategory, ForceSystem};
use crate::resources::FlightConfig;

/// Turns rotor commands and environmental effects into forces on the body.
///
/// Forces are only recorded into a [`ForceSystem`]; the state is never
/// touched here and changes only when the physics world integrates.
#[derive(Debug, Clone)]
pub struct FlightController {
    geometry: RotorGeometry,
    gravity_scalar: f64,
    time_scalar: f64,
}

impl FlightController {
    pub fn new(config: &FlightConfig) -> Self {
        Self {
            geometry: RotorGeometry::new(
                config.left_rotor,
                config.right_rotor,
                config.torque_scalar,
            ),
            gravity_scalar: config.gravity_scalar,
            time_scalar: config.time_scalar,
        }
    }

    pub fn geometry(&self) -> &RotorGeometry {
        &self.geometry
    }

    /// World position of a rotor for the given body state
    pub fn rotor_position(&self, state: &DroneState, side: RotorSide) -> Vector2<f64> {
        state.to_world(&self.geometry.offset(side))
    }

    /// Push along the body's up axis at the rotor's world position.
    ///
    /// `thrust` is -1, 0 or 1; zero records nothing.
    pub fn apply_rotor(
        &self,
        forces: &mut ForceSystem,
        state: &DroneState,
        side: RotorSide,
        thrust: i8,
    ) {
        debug_assert!((-1..=1).contains(&thrust), "thrust out of range: {thrust}");
        if thrust == 0 {
            return;
        }

        let up = state.up();
        let position = self.rotor_position(state, side);
        forces.add_at_position(
            up * f64::from(thrust) * self.time_scalar,
            position,
            ForceCategory::Propulsive,
        );
    }

    /// Constant downward force, independent of mass
    pub fn apply_gravity(&self, forces: &mut ForceSystem) {
        forces.add_central(
            Vector2::new(0.0, -self.gravity_scalar * self.time_scalar),
            ForceCategory::Gravitational,
        );
    }

    /// World-frame wind force, unaffected by body orientation
    pub fn apply_wind(&self, forces: &mut ForceSystem, wind: &WindState) {
        forces.add_central(wind.velocity() * self.time_scalar, ForceCategory::Wind);
    }
}
