use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::components::RotorSide;
use crate::utils::{constants::ACTION_LEVELS, Result, SimError};

/// One discrete decision: a level in {0, 1, 2} per rotor.
///
/// Level 0 is reverse thrust, 1 is off and 2 is full thrust; the rotor
/// thrust is always `level - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    left: u8,
    right: u8,
}

impl Default for Action {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl Action {
    pub const NEUTRAL: Action = Action { left: 1, right: 1 };
    pub const FULL_THRUST: Action = Action { left: 2, right: 2 };

    /// Strict constructor, rejects levels outside {0, 1, 2}
    pub fn try_new(left: i64, right: i64) -> Result<Self> {
        Ok(Self {
            left: Self::check_level(left, RotorSide::Left)?,
            right: Self::check_level(right, RotorSide::Right)?,
        })
    }

    /// Lenient constructor for policy output; out-of-range levels are clamped
    pub fn from_raw(left: i64, right: i64) -> Self {
        Self {
            left: Self::clamp_level(left, RotorSide::Left),
            right: Self::clamp_level(right, RotorSide::Right),
        }
    }

    pub fn level(&self, side: RotorSide) -> u8 {
        match side {
            RotorSide::Left => self.left,
            RotorSide::Right => self.right,
        }
    }

    /// Thrust command in {-1, 0, 1}
    pub fn thrust(&self, side: RotorSide) -> i8 {
        self.level(side) as i8 - 1
    }

    pub fn levels(&self) -> [u8; 2] {
        [self.left, self.right]
    }

    fn check_level(level: i64, side: RotorSide) -> Result<u8> {
        if (0..ACTION_LEVELS).contains(&level) {
            Ok(level as u8)
        } else {
            Err(SimError::InvalidAction(format!(
                "{} rotor level {} outside 0..{}",
                side, level, ACTION_LEVELS
            )))
        }
    }

    fn clamp_level(level: i64, side: RotorSide) -> u8 {
        let clamped = level.clamp(0, ACTION_LEVELS - 1);
        if clamped != level {
            warn!(
                "Clamping invalid {} rotor level {} to {}",
                side, level, clamped
            );
        }
        clamped as u8
    }
}
