use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::constants::OBSERVATION_SIZE;

/// Names of the observation entries, in vector order
pub const OBSERVATION_NAMES: [&str; OBSERVATION_SIZE] = [
    "x",
    "y",
    "rotation",
    "vx",
    "vy",
    "angular_velocity",
    "target_dx",
    "target_dy",
];

/// Fixed-order observation handed to the policy.
///
/// Layout: position relative to the training area (2), rotation in degrees (1),
/// linear velocity (2), angular velocity in deg/s (1), vector from the foot
/// midpoint to the target (2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation(pub [f64; OBSERVATION_SIZE]);

impl Observation {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Named view used by dictionary-style clients
    pub fn to_map(&self) -> HashMap<String, f64> {
        OBSERVATION_NAMES
            .iter()
            .zip(self.0.iter())
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }
}

impl From<Observation> for Vec<f64> {
    fn from(obs: Observation) -> Self {
        obs.to_vec()
    }
}
