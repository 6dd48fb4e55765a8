#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

pub use assertions::{assert_observation_finite, assert_state_eq, assert_state_valid};
pub use fixtures::*;
pub use helpers::*;
