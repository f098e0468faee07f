//! Pointer-driven blade
//!
//! The pointer arrives as a 2D screen coordinate. It is unprojected onto a
//! plane at a fixed distance from the camera, and the blade eases toward
//! that point every frame.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::BladeConfig;

/// Viewpoint collaborator: screen space to world space
pub trait Viewpoint {
    /// World point under `screen` at `depth` units in front of the camera
    fn unproject(&self, screen: Vec2, depth: f32) -> Vec3;
}

/// Pinhole camera. Screen origin is bottom-left, y up, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        // Looking down -Z at the z = 0 play plane from 10 units away
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y: 60f32.to_radians(),
            viewport: Vec2::new(1920.0, 1080.0),
        }
    }
}

impl PerspectiveCamera {
    pub fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y.max(1.0)
    }

    pub fn screen_center(&self) -> Vec2 {
        self.viewport * 0.5
    }
}

impl Viewpoint for PerspectiveCamera {
    fn unproject(&self, screen: Vec2, depth: f32) -> Vec3 {
        let forward = self.forward.normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);

        // Normalized device coords in [-1, 1]
        let ndc = screen / self.viewport.max(Vec2::ONE) * 2.0 - Vec2::ONE;
        let half_h = (self.fov_y * 0.5).tan() * depth;
        let half_w = half_h * self.aspect();

        self.position + forward * depth + right * (ndc.x * half_w) + up * (ndc.y * half_h)
    }
}

/// The player's blade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blade {
    pub position: Vec3,
    /// Last unprojected pointer position
    pub target: Vec3,
    pub follow_speed: f32,
    /// Distance of the blade plane from the camera
    pub depth: f32,
    /// Contact sphere radius, tested by the physics collaborator
    pub radius: f32,
}

impl Blade {
    pub fn new(config: &BladeConfig, position: Vec3) -> Self {
        Self {
            position,
            target: position,
            follow_speed: config.follow_speed,
            depth: config.depth,
            radius: config.radius,
        }
    }

    /// Track the pointer for one frame.
    ///
    /// Uses `lerp(position, target, clamp01(follow_speed * dt))`, which is
    /// framerate dependent.
    pub fn update(&mut self, pointer: Vec2, viewpoint: &dyn Viewpoint, dt: f32) {
        self.target = viewpoint.unproject(pointer, self.depth);
        let t = (self.follow_speed * dt).clamp(0.0, 1.0);
        self.position = self.position.lerp(self.target, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-4)
    }

    #[test]
    fn test_screen_center_unprojects_along_forward() {
        let camera = PerspectiveCamera::default();
        let world = camera.unproject(camera.screen_center(), 10.0);
        assert!(approx(world, Vec3::ZERO), "got {}", world);
    }

    #[test]
    fn test_unproject_orientation() {
        let camera = PerspectiveCamera::default();
        let right_top = camera.unproject(camera.viewport, 10.0);
        let left_bottom = camera.unproject(Vec2::ZERO, 10.0);

        assert!(right_top.x > 0.0 && right_top.y > 0.0);
        assert!(left_bottom.x < 0.0 && left_bottom.y < 0.0);
        assert!(right_top.z.abs() < 1e-4);

        // tan(30°) * 10
        let half_h = 30f32.to_radians().tan() * 10.0;
        assert!((right_top.y - half_h).abs() < 1e-3);
        assert!((right_top.x - half_h * camera.aspect()).abs() < 1e-3);
    }

    #[test]
    fn test_depth_scales_spread() {
        let camera = PerspectiveCamera::default();
        let near = camera.unproject(camera.viewport, 5.0);
        let far = camera.unproject(camera.viewport, 10.0);
        assert!((far.x - near.x * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_blade_eases_toward_target() {
        let camera = PerspectiveCamera::default();
        let config = BladeConfig {
            follow_speed: 20.0,
            ..Default::default()
        };
        let mut blade = Blade::new(&config, Vec3::ZERO);
        let pointer = camera.viewport;
        let target = camera.unproject(pointer, config.depth);

        // 20 * 0.025 = 0.5
        blade.update(pointer, &camera, 0.025);
        assert!(approx(blade.position, target * 0.5));
        assert!(approx(blade.target, target));
    }

    #[test]
    fn test_large_dt_snaps_to_target() {
        let camera = PerspectiveCamera::default();
        let mut blade = Blade::new(&BladeConfig::default(), Vec3::new(3.0, 3.0, 0.0));
        blade.update(camera.screen_center(), &camera, 1.0);
        assert!(approx(blade.position, Vec3::ZERO));
    }

    #[test]
    fn test_zero_dt_holds_position() {
        let camera = PerspectiveCamera::default();
        let start = Vec3::new(1.0, 2.0, 0.0);
        let mut blade = Blade::new(&BladeConfig::default(), start);
        blade.update(camera.screen_center(), &camera, 0.0);
        assert_eq!(blade.position, start);
    }
}
