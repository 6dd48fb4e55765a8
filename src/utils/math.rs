use nalgebra::{Rotation2, Vector2};

use crate::utils::constants::{DEG_TO_RAD, RAD_TO_DEG};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

/// Rotate a body-frame vector into the world frame, counter-clockwise positive
#[inline]
pub fn rotate(v: &Vector2<f64>, rotation_deg: f64) -> Vector2<f64> {
    Rotation2::new(deg_to_rad(rotation_deg)) * v
}

/// Z component of the 3D cross product of two planar vectors
#[inline]
pub fn cross(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Normalise a vector, returning `None` when it is too short to have a direction
pub fn try_normalize(v: &Vector2<f64>, min_norm: f64) -> Option<Vector2<f64>> {
    let norm = v.norm();
    if norm < min_norm || !norm.is_finite() {
        None
    } else {
        Some(v / norm)
    }
}
