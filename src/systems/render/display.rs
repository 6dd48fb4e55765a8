use nalgebra::Vector2;
use tracing::{debug, trace};

use crate::components::{RotorSide, WindState};
use crate::utils::math::rad_to_deg;

/// Receiver for presentation updates from the environment.
///
/// Called separately from force application so that a headless run can
/// plug in [`NullDisplay`] without touching the simulation path.
pub trait DisplaySink: Send {
    /// Called for every rotor command, including zero thrust
    fn report_thrust(&mut self, side: RotorSide, thrust: i8);

    /// Called once per reset with the episode's wind
    fn report_wind(&mut self, wind: &WindState);
}

/// Discards all updates
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn report_thrust(&mut self, _side: RotorSide, _thrust: i8) {}
    fn report_wind(&mut self, _wind: &WindState) {}
}

/// Visual state of one rotor's thrust arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrustArrow {
    #[default]
    Hidden,
    Up,
    Down,
}

impl ThrustArrow {
    pub fn from_thrust(thrust: i8) -> Self {
        match thrust.signum() {
            1 => ThrustArrow::Up,
            -1 => ThrustArrow::Down,
            _ => ThrustArrow::Hidden,
        }
    }
}

/// Wind indicator heading in degrees.
///
/// Uses `atan(y / x)` and flips by 180 when the wind blows toward -x, so the
/// result covers the full circle. A calm wind points at 0.
pub fn wind_indicator_heading(direction: &Vector2<f64>) -> f64 {
    if direction.x == 0.0 {
        return match direction.y.partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Greater) => 90.0,
            Some(std::cmp::Ordering::Less) => -90.0,
            _ => 0.0,
        };
    }
    let heading = rad_to_deg((direction.y / direction.x).atan());
    if direction.x < 0.0 {
        heading + 180.0
    } else {
        heading
    }
}

/// Keeps the latest indicator state and traces changes
#[derive(Debug, Clone, Default)]
pub struct LogDisplay {
    arrows: [ThrustArrow; 2],
    wind_heading: f64,
    wind_speed: f64,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arrow(&self, side: RotorSide) -> ThrustArrow {
        match side {
            RotorSide::Left => self.arrows[0],
            RotorSide::Right => self.arrows[1],
        }
    }

    pub fn wind_heading(&self) -> f64 {
        self.wind_heading
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }
}

impl DisplaySink for LogDisplay {
    fn report_thrust(&mut self, side: RotorSide, thrust: i8) {
        let arrow = ThrustArrow::from_thrust(thrust);
        let slot = match side {
            RotorSide::Left => &mut self.arrows[0],
            RotorSide::Right => &mut self.arrows[1],
        };
        if *slot != arrow {
            trace!("{} thrust arrow {:?} -> {:?}", side, slot, arrow);
            *slot = arrow;
        }
    }

    fn report_wind(&mut self, wind: &WindState) {
        self.wind_heading = wind_indicator_heading(&wind.direction);
        self.wind_speed = wind.speed;
        debug!(
            "Wind indicator heading={:.1} deg speed={:.3}",
            self.wind_heading, self.wind_speed
        );
    }
}
