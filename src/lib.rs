//! Fruit Slicer - gameplay core of an arcade slicing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, launch, blade contact, scoring)
//! - `config`: Data-driven game tuning loaded from JSON
//! - `error`: Construction-time configuration errors

pub mod config;
pub mod error;
pub mod sim;

pub use config::{Archetype, GameConfig, Range};
pub use error::ConfigError;

/// Gameplay defaults
pub mod consts {
    /// Fixed frame step used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f32 = 1.5;
    /// Lower bound accepted by `SpawnScheduler::set_spawn_interval`
    pub const MIN_SPAWN_INTERVAL: f32 = 0.1;
    /// Horizontal spawn range
    pub const SPAWN_MIN_X: f32 = -8.0;
    pub const SPAWN_MAX_X: f32 = 8.0;
    /// Spawner sits below the visible area
    pub const SPAWNER_Y: f32 = -6.0;

    /// Launch impulse magnitude range
    pub const MIN_LAUNCH_FORCE: f32 = 8.0;
    pub const MAX_LAUNCH_FORCE: f32 = 12.0;
    /// Force range used when the spawner dictates launch force
    pub const SPAWNER_MIN_LAUNCH_FORCE: f32 = 10.0;
    pub const SPAWNER_MAX_LAUNCH_FORCE: f32 = 15.0;
    /// Per-axis torque impulse range
    pub const MIN_TORQUE: f32 = -50.0;
    pub const MAX_TORQUE: f32 = 50.0;

    /// Entities below this height are removed without scoring
    pub const DESTROY_Y: f32 = -10.0;

    /// Blade plane distance from the camera
    pub const BLADE_DEPTH: f32 = 10.0;
    /// Blade smoothing rate (per second, framerate dependent)
    pub const BLADE_FOLLOW_SPEED: f32 = 20.0;
    /// Blade bounding sphere radius
    pub const BLADE_RADIUS: f32 = 0.5;

    /// Default fruit bounding radius and mass
    pub const FRUIT_RADIUS: f32 = 0.5;
    pub const FRUIT_MASS: f32 = 1.0;

    /// Earth gravity (units/s²)
    pub const GRAVITY: f32 = -9.81;
}
