use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::math::cross;

/// Source of a force acting on the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Propulsive,
    Gravitational,
    Wind,
}

/// A world-frame force, optionally applied away from the body origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Force vector in the world frame
    pub vector: Vector2<f64>,
    /// World-space point of application (if None, force is applied at the origin)
    pub point: Option<Vector2<f64>>,
    pub category: ForceCategory,
}

impl Force {
    pub fn at_origin(vector: Vector2<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            point: None,
            category,
        }
    }

    pub fn at_point(vector: Vector2<f64>, point: Vector2<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            point: Some(point),
            category,
        }
    }

    /// Torque about `center` (counter-clockwise positive)
    pub fn torque_about(&self, center: &Vector2<f64>) -> f64 {
        self.point
            .map(|point| cross(&(point - center), &self.vector))
            .unwrap_or(0.0)
    }
}

/// Forces accumulated for a single integration step.
///
/// Every `add` appends; nothing is overwritten until `clear`.
#[derive(Debug, Clone, Default)]
pub struct ForceSystem {
    forces: Vec<Force>,
}

impl ForceSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, force: Force) {
        self.forces.push(force);
    }

    /// Add a force applied at a world-space position
    pub fn add_at_position(
        &mut self,
        vector: Vector2<f64>,
        point: Vector2<f64>,
        category: ForceCategory,
    ) {
        self.add(Force::at_point(vector, point, category));
    }

    /// Add a force applied at the body origin
    pub fn add_central(&mut self, vector: Vector2<f64>, category: ForceCategory) {
        self.add(Force::at_origin(vector, category));
    }

    pub fn clear(&mut self) {
        self.forces.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn forces(&self) -> impl Iterator<Item = &Force> {
        self.forces.iter()
    }

    /// Net force in the world frame
    pub fn net_force(&self) -> Vector2<f64> {
        self.forces.iter().map(|f| f.vector).sum()
    }

    /// Net torque about `center`
    pub fn net_torque(&self, center: &Vector2<f64>) -> f64 {
        self.forces.iter().map(|f| f.torque_about(center)).sum()
    }

    /// Net force from one category only
    pub fn force_by_category(&self, category: ForceCategory) -> Vector2<f64> {
        self.forces
            .iter()
            .filter(|f| f.category == category)
            .map(|f| f.vector)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forces_accumulate() {
        let mut system = ForceSystem::new();
        system.add_central(Vector2::new(0.0, -10.0), ForceCategory::Gravitational);
        system.add_central(Vector2::new(0.0, -10.0), ForceCategory::Gravitational);
        system.add_central(Vector2::new(1.0, 0.0), ForceCategory::Wind);

        let net = system.net_force();
        assert_relative_eq!(net.x, 1.0);
        assert_relative_eq!(net.y, -20.0);
        assert_eq!(system.len(), 3);
    }

    #[test]
    fn test_off_centre_force_produces_torque() {
        let mut system = ForceSystem::new();
        let center = Vector2::new(2.0, 0.0);
        system.add_at_position(
            Vector2::new(0.0, 10.0),
            Vector2::new(2.5, 0.0),
            ForceCategory::Propulsive,
        );
        assert_relative_eq!(system.net_torque(&center), 5.0);

        // Central forces never contribute torque
        system.add_central(Vector2::new(3.0, 3.0), ForceCategory::Wind);
        assert_relative_eq!(system.net_torque(&center), 5.0);
    }

    #[test]
    fn test_force_by_category() {
        let mut system = ForceSystem::new();
        system.add_central(Vector2::new(0.0, -10.0), ForceCategory::Gravitational);
        system.add_central(Vector2::new(2.0, 0.5), ForceCategory::Wind);
        let wind = system.force_by_category(ForceCategory::Wind);
        assert_relative_eq!(wind.x, 2.0);
        assert_relative_eq!(wind.y, 0.5);
        assert!(system
            .force_by_category(ForceCategory::Propulsive)
            .iter()
            .all(|v| *v == 0.0));
    }
}
