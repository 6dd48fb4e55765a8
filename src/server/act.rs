use serde::{Deserialize, Serialize};

use crate::components::Action;
use crate::utils::{constants::ACTION_LEVELS, Result, SimError};

/// Two rotors, three levels each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    pub rotors: usize,
    pub levels: i64,
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self {
            rotors: 2,
            levels: ACTION_LEVELS,
        }
    }
}

impl ActionSpace {
    /// Turn a raw client action into an [`Action`].
    ///
    /// The length must match; out-of-range levels are clamped.
    pub fn to_action(&self, raw: &[i64]) -> Result<Action> {
        match raw {
            [left, right] => Ok(Action::from_raw(*left, *right)),
            _ => Err(SimError::InvalidAction(format!(
                "expected {} rotor levels, got {}",
                self.rotors,
                raw.len()
            ))),
        }
    }
}
