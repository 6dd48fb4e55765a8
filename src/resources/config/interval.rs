use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Closed sampling range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric interval `[-half_width, half_width]`
    pub const fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn offset(&self, by: f64) -> Self {
        Self::new(self.min + by, self.max + by)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidParameter {
                name: name.to_string(),
                value: format!("[{}, {}]", self.min, self.max),
            });
        }
        Ok(())
    }
}
