use serde::{Deserialize, Serialize};

use crate::components::OBSERVATION_NAMES;
use crate::utils::constants::OBSERVATION_SIZE;

/// Unbounded continuous box with named entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub size: usize,
    pub names: Vec<String>,
}

impl Default for ObservationSpace {
    fn default() -> Self {
        Self {
            size: OBSERVATION_SIZE,
            names: OBSERVATION_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
