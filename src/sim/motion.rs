//! Launch impulses for freshly spawned fruit
//!
//! A fruit gets exactly one linear impulse (straight up) and one angular
//! impulse when it enters the world. After that the physics integrator
//! owns its motion.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Range;
use crate::consts::*;
use crate::error::ConfigError;

/// One-shot launch applied to a fruit body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchImpulse {
    /// Linear impulse
    pub force: Vec3,
    /// Angular impulse, one component per rotational axis
    pub torque: Vec3,
}

/// Force and torque ranges a fruit is launched with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionProfile {
    /// Upward impulse magnitude
    pub launch_force: Range,
    /// Per-axis torque impulse
    pub torque: Range,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            launch_force: Range::new(MIN_LAUNCH_FORCE, MAX_LAUNCH_FORCE),
            torque: Range::new(MIN_TORQUE, MAX_TORQUE),
        }
    }
}

impl MotionProfile {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.launch_force.validate("launch_force")?;
        self.torque.validate("torque")
    }

    /// Sample a full launch: random upward force, random spin
    pub fn sample<R: Rng>(&self, rng: &mut R) -> LaunchImpulse {
        let magnitude = self.launch_force.sample(rng);
        LaunchImpulse {
            force: Vec3::Y * magnitude,
            torque: self.sample_torque(rng),
        }
    }

    /// Launch with a caller-chosen force. Spin is still sampled here; only
    /// the linear part can be overridden.
    pub fn with_force<R: Rng>(&self, force: Vec3, rng: &mut R) -> LaunchImpulse {
        LaunchImpulse {
            force,
            torque: self.sample_torque(rng),
        }
    }

    fn sample_torque<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let x = self.torque.sample(rng);
        let y = self.torque.sample(rng);
        let z = self.torque.sample(rng);
        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sampled_force_stays_in_range() {
        let profile = MotionProfile {
            launch_force: Range::new(8.0, 12.0),
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..10_000 {
            let launch = profile.sample(&mut rng);
            assert!(
                (8.0..=12.0).contains(&launch.force.y),
                "force {} out of range",
                launch.force.y
            );
        }
    }

    #[test]
    fn test_force_is_straight_up() {
        let profile = MotionProfile::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let launch = profile.sample(&mut rng);
        assert_eq!(launch.force.x, 0.0);
        assert_eq!(launch.force.z, 0.0);
        assert!(launch.force.y > 0.0);
    }

    #[test]
    fn test_custom_force_keeps_random_torque() {
        let profile = MotionProfile::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let force = Vec3::new(1.0, 14.0, 0.0);

        let a = profile.with_force(force, &mut rng);
        let b = profile.with_force(force, &mut rng);
        assert_eq!(a.force, force);
        assert_eq!(b.force, force);
        // Torque is resampled on every call
        assert_ne!(a.torque, b.torque);
    }

    #[test]
    fn test_torque_axes_are_independent() {
        let profile = MotionProfile::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let t = profile.sample(&mut rng).torque;
        assert!(t.x != t.y || t.y != t.z);
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let profile = MotionProfile {
            launch_force: Range::new(10.0, 10.0),
            torque: Range::new(0.0, 0.0),
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let launch = profile.sample(&mut rng);
        assert_eq!(launch.force, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(launch.torque, Vec3::ZERO);
    }

    proptest! {
        #[test]
        fn prop_torque_within_bounds(seed in any::<u64>(), lo in -100.0f32..0.0, span in 0.0f32..200.0) {
            let profile = MotionProfile {
                torque: Range::new(lo, lo + span),
                ..Default::default()
            };
            let mut rng = Pcg32::seed_from_u64(seed);
            let t = profile.sample(&mut rng).torque;
            for c in [t.x, t.y, t.z] {
                prop_assert!(c >= lo && c <= lo + span);
            }
        }
    }
}
