use nalgebra::Vector2;
use rand::Rng;
use tracing::{debug, warn};

use crate::components::WindState;
use crate::resources::WindConfig;
use crate::utils::{constants::MIN_WIND_NORM, math::try_normalize};

/// Samples a new, mostly horizontal, wind at the start of each episode
#[derive(Debug, Clone, Default)]
pub struct WindModel {
    config: WindConfig,
}

impl WindModel {
    pub fn new(config: WindConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WindConfig {
        &self.config
    }

    /// Draw a wind for the next episode.
    ///
    /// The vertical component is the horizontal one times a second uniform
    /// draw, so it never exceeds the horizontal magnitude.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> WindState {
        if !self.config.enabled {
            return WindState::calm();
        }

        let horizontal: f64 = rng.gen_range(-1.0..=1.0);
        let vertical = horizontal * rng.gen_range(-1.0..=1.0);
        let speed = self.config.speed.sample(rng);

        let wind = wind_from_sample(horizontal, vertical, speed);
        debug!(
            "Generated wind direction=({:.3}, {:.3}) speed={:.3}",
            wind.direction.x, wind.direction.y, wind.speed
        );
        wind
    }
}

/// Build a wind state from an unnormalised direction sample.
///
/// A sample too short to normalise yields a calm wind.
pub fn wind_from_sample(horizontal: f64, vertical: f64, speed: f64) -> WindState {
    match try_normalize(&Vector2::new(horizontal, vertical), MIN_WIND_NORM) {
        Some(direction) => WindState::new(direction, speed.max(0.0)),
        None => {
            warn!(
                "Degenerate wind sample ({}, {}), using calm wind",
                horizontal, vertical
            );
            WindState::calm()
        }
    }
}
