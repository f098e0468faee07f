//! Game tuning and session configuration
//!
//! Set once before a session starts. Every field has a default, so partial
//! JSON files are valid.

use std::path::Path;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::motion::MotionProfile;

/// Closed interval `[min, max]` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max]`. A degenerate range yields `min`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject non-finite or reversed bounds
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// A kind of fruit the spawner can pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    /// Bounding sphere radius used for blade contact
    #[serde(default = "default_fruit_radius")]
    pub radius: f32,
    #[serde(default = "default_fruit_mass")]
    pub mass: f32,
    /// Per-archetype launch tuning; falls back to the session profile
    #[serde(default)]
    pub motion: Option<MotionProfile>,
}

fn default_fruit_radius() -> f32 {
    FRUIT_RADIUS
}

fn default_fruit_mass() -> f32 {
    FRUIT_MASS
}

impl Archetype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            radius: FRUIT_RADIUS,
            mass: FRUIT_MASS,
            motion: None,
        }
    }
}

/// Blade tracking parameters (constant for the session)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BladeConfig {
    /// Distance from the camera of the plane the blade moves in
    pub depth: f32,
    pub follow_speed: f32,
    pub radius: f32,
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            depth: BLADE_DEPTH,
            follow_speed: BLADE_FOLLOW_SPEED,
            radius: BLADE_RADIUS,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Spawning ===
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Horizontal spawn coordinate range
    pub spawn_x: Range,
    /// Spawner position; y and z of every spawn come from here
    pub spawner_origin: Vec3,
    /// When set, the spawner samples launch force itself and overrides
    /// the fruit's own profile (torque is still sampled by the fruit)
    pub spawner_launch_force: Option<Range>,
    pub archetypes: Vec<Archetype>,

    // === Motion ===
    /// Launch profile for archetypes without their own
    pub motion: MotionProfile,
    pub gravity: Vec3,
    pub linear_drag: f32,
    pub angular_drag: f32,

    // === Removal ===
    /// Fruit below this height is removed without scoring
    pub destroy_y: f32,

    // === Blade ===
    pub blade: BladeConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_interval: SPAWN_INTERVAL,
            spawn_x: Range::new(SPAWN_MIN_X, SPAWN_MAX_X),
            spawner_origin: Vec3::new(0.0, SPAWNER_Y, 0.0),
            spawner_launch_force: None,
            archetypes: vec![Archetype::new("fruit")],

            motion: MotionProfile::default(),
            gravity: Vec3::new(0.0, GRAVITY, 0.0),
            linear_drag: 0.0,
            angular_drag: 0.05,

            destroy_y: DESTROY_Y,

            blade: BladeConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Enable spawner-controlled launch force with the default range
    pub fn with_spawner_launch_force(mut self) -> Self {
        self.spawner_launch_force = Some(Range::new(
            SPAWNER_MIN_LAUNCH_FORCE,
            SPAWNER_MAX_LAUNCH_FORCE,
        ));
        self
    }

    /// Motion profile for the given archetype index
    pub fn motion_for(&self, archetype: usize) -> &MotionProfile {
        self.archetypes
            .get(archetype)
            .and_then(|a| a.motion.as_ref())
            .unwrap_or(&self.motion)
    }

    /// Check everything a session depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.archetypes.is_empty() {
            return Err(ConfigError::EmptyArchetypes);
        }

        positive("spawn_interval", self.spawn_interval)?;
        self.spawn_x.validate("spawn_x")?;
        if let Some(force) = &self.spawner_launch_force {
            force.validate("spawner_launch_force")?;
        }

        self.motion.validate()?;
        for archetype in &self.archetypes {
            positive("archetype radius", archetype.radius)?;
            positive("archetype mass", archetype.mass)?;
            if let Some(motion) = &archetype.motion {
                motion.validate()?;
            }
        }

        positive("blade depth", self.blade.depth)?;
        positive("blade follow_speed", self.blade.follow_speed)?;
        positive("blade radius", self.blade.radius)?;

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn_interval, 1.5);
        assert_eq!(config.motion.launch_force, Range::new(8.0, 12.0));
        assert_eq!(config.destroy_y, -10.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(
            r#"{ "spawn_interval": 0.75, "archetypes": [{ "name": "melon", "radius": 1.2 }] }"#,
        )
        .unwrap();
        assert_eq!(config.spawn_interval, 0.75);
        assert_eq!(config.archetypes.len(), 1);
        assert_eq!(config.archetypes[0].name, "melon");
        assert_eq!(config.archetypes[0].mass, FRUIT_MASS);
        assert_eq!(config.blade.depth, BLADE_DEPTH);
    }

    #[test]
    fn test_empty_archetypes_rejected() {
        let err = GameConfig::from_json_str(r#"{ "archetypes": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyArchetypes));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let mut config = GameConfig::default();
        config.spawn_x = Range::new(5.0, -5.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { name: "spawn_x", .. })
        ));
    }

    #[test]
    fn test_non_positive_interval_rejected() {
        let mut config = GameConfig::default();
        config.spawn_interval = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "spawn_interval", .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_archetype_motion_override() {
        let mut config = GameConfig::default();
        let heavy = MotionProfile {
            launch_force: Range::new(20.0, 22.0),
            ..Default::default()
        };
        config.archetypes.push(Archetype {
            motion: Some(heavy),
            ..Archetype::new("coconut")
        });
        assert_eq!(config.motion_for(0), &config.motion);
        assert_eq!(config.motion_for(1).launch_force, Range::new(20.0, 22.0));
    }
}
