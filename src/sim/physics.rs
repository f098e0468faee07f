//! Rigid body integration boundary
//!
//! The gameplay core only needs impulses and a per-tick integration step.
//! `BallisticPhysics` is the built-in integrator; an engine binding can
//! implement `Physics` instead.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::spheres_overlap;
use crate::config::GameConfig;

/// Kinematic state of one fruit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub angular_velocity: Vec3,
    pub mass: f32,
    /// Bounding sphere radius
    pub radius: f32,
}

impl Body {
    /// Body at rest at `position`
    pub fn at_rest(position: Vec3, mass: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            angular_velocity: Vec3::ZERO,
            mass,
            radius,
        }
    }
}

/// Physics collaborator
pub trait Physics {
    /// Instantaneous change of momentum
    fn apply_impulse(&mut self, body: &mut Body, impulse: Vec3);
    /// Instantaneous change of angular momentum
    fn apply_torque_impulse(&mut self, body: &mut Body, torque: Vec3);
    /// Advance one body by `dt`
    fn integrate(&mut self, body: &mut Body, dt: f32);
    /// Whether a sphere at `center` intersects the body's contact volume.
    /// Engine bindings with their own shapes override this.
    fn overlaps(&self, center: Vec3, radius: f32, body: &Body) -> bool {
        spheres_overlap(center, radius, body.position, body.radius)
    }
}

/// Semi-implicit Euler under constant gravity with linear/angular drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticPhysics {
    pub gravity: Vec3,
    pub linear_drag: f32,
    pub angular_drag: f32,
}

impl BallisticPhysics {
    pub fn new(gravity: Vec3) -> Self {
        Self {
            gravity,
            linear_drag: 0.0,
            angular_drag: 0.0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            gravity: config.gravity,
            linear_drag: config.linear_drag.max(0.0),
            angular_drag: config.angular_drag.max(0.0),
        }
    }
}

impl Physics for BallisticPhysics {
    fn apply_impulse(&mut self, body: &mut Body, impulse: Vec3) {
        body.velocity += impulse / body.mass.max(f32::EPSILON);
    }

    fn apply_torque_impulse(&mut self, body: &mut Body, torque: Vec3) {
        // Unit inertia tensor
        body.angular_velocity += torque;
    }

    fn integrate(&mut self, body: &mut Body, dt: f32) {
        body.velocity += self.gravity * dt;
        body.velocity /= 1.0 + self.linear_drag * dt;
        body.angular_velocity /= 1.0 + self.angular_drag * dt;

        body.position += body.velocity * dt;
        let spin = Quat::from_scaled_axis(body.angular_velocity * dt);
        body.rotation = (spin * body.rotation).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_scales_with_mass() {
        let mut physics = BallisticPhysics::new(Vec3::ZERO);
        let mut light = Body::at_rest(Vec3::ZERO, 1.0, 0.5);
        let mut heavy = Body::at_rest(Vec3::ZERO, 2.0, 0.5);

        physics.apply_impulse(&mut light, Vec3::Y * 10.0);
        physics.apply_impulse(&mut heavy, Vec3::Y * 10.0);
        assert_eq!(light.velocity, Vec3::Y * 10.0);
        assert_eq!(heavy.velocity, Vec3::Y * 5.0);
    }

    #[test]
    fn test_projectile_rises_then_falls() {
        let mut physics = BallisticPhysics::new(Vec3::new(0.0, -9.81, 0.0));
        let mut body = Body::at_rest(Vec3::ZERO, 1.0, 0.5);
        physics.apply_impulse(&mut body, Vec3::Y * 10.0);

        let dt = 1.0 / 60.0;
        let mut peak = 0.0f32;
        for _ in 0..180 {
            physics.integrate(&mut body, dt);
            peak = peak.max(body.position.y);
        }
        // v²/2g ≈ 5.1
        assert!((peak - 5.1).abs() < 0.2, "peak {}", peak);
        assert!(body.position.y < 0.0);
        assert_eq!(body.position.x, 0.0);
    }

    #[test]
    fn test_torque_spins_body() {
        let mut physics = BallisticPhysics::new(Vec3::ZERO);
        let mut body = Body::at_rest(Vec3::ZERO, 1.0, 0.5);
        physics.apply_torque_impulse(&mut body, Vec3::new(0.0, 0.0, 3.0));
        physics.integrate(&mut body, 0.1);

        assert_eq!(body.angular_velocity, Vec3::new(0.0, 0.0, 3.0));
        assert!(body.rotation.angle_between(Quat::IDENTITY) > 0.25);
        assert!(body.rotation.is_normalized());
    }

    #[test]
    fn test_default_overlap_uses_both_radii() {
        let physics = BallisticPhysics::new(Vec3::ZERO);
        let near = Body::at_rest(Vec3::new(0.9, 0.0, 0.0), 1.0, 0.5);
        let far = Body::at_rest(Vec3::new(1.1, 0.0, 0.0), 1.0, 0.5);
        assert!(physics.overlaps(Vec3::ZERO, 0.5, &near));
        assert!(!physics.overlaps(Vec3::ZERO, 0.5, &far));
    }

    #[test]
    fn test_drag_slows_body() {
        let mut physics = BallisticPhysics {
            gravity: Vec3::ZERO,
            linear_drag: 1.0,
            angular_drag: 1.0,
        };
        let mut body = Body::at_rest(Vec3::ZERO, 1.0, 0.5);
        body.velocity = Vec3::X * 4.0;
        body.angular_velocity = Vec3::Y * 4.0;
        physics.integrate(&mut body, 0.5);
        assert!(body.velocity.x < 4.0);
        assert!(body.angular_velocity.y < 4.0);
    }
}
