use crate::components::DroneState;
use crate::resources::EnvironmentConfig;

/// Result of the per-step termination check, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    OutOfBounds,
    Landed,
    Continue,
}

/// Left/right walls or ceiling of the training area crossed (body origin)
pub fn is_out_of_bounds(state: &DroneState, config: &EnvironmentConfig) -> bool {
    let origin = config.area_origin;
    state.position.x < origin.x - config.bounds_half_width
        || state.position.x > origin.x + config.bounds_half_width
        || state.position.y > origin.y + config.ceiling
}

/// Decide whether the episode ends this step.
///
/// Bounds are checked before contact, so a drone that is both outside the
/// area and touching something is scored as out of bounds. Contact only
/// counts once `step_count` has passed the grace period.
pub fn check_termination(
    state: &DroneState,
    in_contact: bool,
    step_count: u32,
    config: &EnvironmentConfig,
) -> Termination {
    if is_out_of_bounds(state, config) {
        Termination::OutOfBounds
    } else if in_contact && step_count > config.grace_steps {
        Termination::Landed
    } else {
        Termination::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn at(x: f64, y: f64) -> DroneState {
        DroneState::at_position(Vector2::new(x, y))
    }

    #[test]
    fn test_bounds_relative_to_origin() {
        let config = EnvironmentConfig::default().with_origin(Vector2::new(10.0, 5.0));
        assert!(!is_out_of_bounds(&at(16.9, 5.0), &config));
        assert!(is_out_of_bounds(&at(17.5, 5.0), &config));
        assert!(is_out_of_bounds(&at(2.9, 5.0), &config));
        assert!(is_out_of_bounds(&at(10.0, 11.1), &config));
        // No floor: falling below is left to contact detection
        assert!(!is_out_of_bounds(&at(10.0, -50.0), &config));
    }

    #[test]
    fn test_out_of_bounds_beats_contact() {
        let config = EnvironmentConfig::default();
        assert_eq!(
            check_termination(&at(7.5, 0.0), true, 50, &config),
            Termination::OutOfBounds
        );
    }

    #[test]
    fn test_grace_period_boundary() {
        let config = EnvironmentConfig::default();
        let state = at(0.0, 0.0);
        assert_eq!(check_termination(&state, true, 3, &config), Termination::Continue);
        assert_eq!(check_termination(&state, true, 5, &config), Termination::Continue);
        assert_eq!(check_termination(&state, true, 6, &config), Termination::Landed);
        assert_eq!(check_termination(&state, false, 6, &config), Termination::Continue);
    }
}
