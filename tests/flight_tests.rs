mod common;

use approx::assert_relative_eq;
use nalgebra::Vector2;

use common::*;
use lander::{
    components::{DroneState, RotorSide, WindState},
    physics::{ForceSystem, PhysicsError, PhysicsWorld},
    resources::{FlightConfig, PhysicsConfig},
    systems::{FlightController, WindModel},
};

fn world() -> PhysicsWorld {
    PhysicsWorld::new(PhysicsConfig::default()).unwrap()
}

#[test]
fn test_free_fall_semi_implicit_euler() {
    let world = world();
    let flight = FlightController::new(&FlightConfig::default());
    let dt = world.timestep();

    let mut state = DroneState::at_position(Vector2::new(0.0, 10.0));
    let mut forces = ForceSystem::new();
    for step in 1..=10 {
        forces.clear();
        flight.apply_gravity(&mut forces);
        state = world.step(&state, &forces).unwrap();

        let n = f64::from(step);
        assert_relative_eq!(state.velocity.y, -10.0 * dt * n, epsilon = 1e-12);
        // Position uses the updated velocity each step
        assert_relative_eq!(
            state.position.y,
            10.0 - 10.0 * dt * dt * n * (n + 1.0) / 2.0,
            epsilon = 1e-12
        );
    }
    assert_state_valid(&state);
}

#[test]
fn test_balanced_hover_is_stationary() {
    // Two rotors at full thrust against doubled gravity cancel exactly
    let flight = FlightController::new(&FlightConfig {
        gravity_scalar: 2.0,
        ..Default::default()
    });
    let state = DroneState::at_position(Vector2::new(0.0, 1.0));
    let mut forces = ForceSystem::new();
    flight.apply_rotor(&mut forces, &state, RotorSide::Left, 1);
    flight.apply_rotor(&mut forces, &state, RotorSide::Right, 1);
    flight.apply_gravity(&mut forces);

    let next = world().step(&state, &forces).unwrap();
    assert_state_eq(&next, &state, 1e-12);
}

#[test]
fn test_velocity_limits() {
    let world = PhysicsWorld::new(PhysicsConfig {
        max_velocity: 1.0,
        max_angular_velocity: 5.0,
        ..Default::default()
    })
    .unwrap();
    let state = DroneState::new(Vector2::zeros(), 0.0, Vector2::new(30.0, 40.0), 100.0);

    let next = world.step(&state, &ForceSystem::new()).unwrap();
    assert_relative_eq!(next.speed(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(next.velocity.x, 0.6, epsilon = 1e-12);
    assert_eq!(next.angular_velocity, 5.0);
}

#[test]
fn test_non_finite_state_is_an_error() {
    let state = DroneState::new(Vector2::new(f64::NAN, 0.0), 0.0, Vector2::zeros(), 0.0);
    assert!(matches!(
        world().step(&state, &ForceSystem::new()),
        Err(PhysicsError::ComputationError(_))
    ));
}

#[test]
fn test_invalid_physics_config_is_rejected() {
    let config = PhysicsConfig {
        mass: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        PhysicsWorld::new(config),
        Err(PhysicsError::InvalidParameter(_))
    ));
}

#[test]
fn test_wind_pushes_drone_downwind() {
    let flight = FlightController::new(&FlightConfig::default());
    let wind = WindState::new(Vector2::new(-1.0, 0.0), 0.2);
    let mut forces = ForceSystem::new();
    flight.apply_wind(&mut forces, &wind);

    let next = world().step(&DroneState::default(), &forces).unwrap();
    assert_relative_eq!(next.velocity.x, -2.0 * 0.02, epsilon = 1e-12);
    assert_eq!(next.angular_velocity, 0.0);
}

#[test]
fn test_wind_model_respects_config() {
    let model = WindModel::default();
    let mut rng = lander::utils::RngManager::new(TEST_SEED).get_rng("wind");
    let wind = model.generate(&mut rng);
    assert!((0.05..=0.2).contains(&wind.speed));
}
