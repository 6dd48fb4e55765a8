use std::f64::consts::PI;

pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Number of scalars in an observation vector
pub const OBSERVATION_SIZE: usize = 8;

/// Number of discrete levels per rotor action
pub const ACTION_LEVELS: i64 = 3;

/// Below this magnitude a wind sample has no usable direction
pub const MIN_WIND_NORM: f64 = 1e-5;

pub const MAX_TIMESTEP: f64 = 1.0 / 10.0; // Maximum physics timestep
pub const MIN_TIMESTEP: f64 = 1.0 / 1000.0; // Minimum physics timestep
