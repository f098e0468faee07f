//! Periodic fruit spawning
//!
//! A single countdown. When it runs out the scheduler emits one spawn
//! request and re-arms to the full interval. Overshoot is discarded, so a
//! long frame still produces at most one spawn.

use glam::Vec3;
use rand::Rng;

use crate::config::{GameConfig, Range};
use crate::consts::MIN_SPAWN_INTERVAL;
use crate::error::ConfigError;

/// Where and what to spawn. Launch motion is up to the receiver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    /// Index into the configured archetype set
    pub archetype: usize,
    pub position: Vec3,
}

#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    interval: f32,
    timer: f32,
    spawn_x: Range,
    origin: Vec3,
    archetype_count: usize,
}

impl SpawnScheduler {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        if config.archetypes.is_empty() {
            return Err(ConfigError::EmptyArchetypes);
        }
        config.spawn_x.validate("spawn_x")?;
        if !(config.spawn_interval.is_finite() && config.spawn_interval > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "spawn_interval",
                value: config.spawn_interval,
            });
        }

        Ok(Self {
            interval: config.spawn_interval,
            timer: config.spawn_interval,
            spawn_x: config.spawn_x,
            origin: config.spawner_origin,
            archetype_count: config.archetypes.len(),
        })
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Time left on the running countdown
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Advance the countdown. Returns a request when it expires.
    pub fn tick<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Option<SpawnRequest> {
        self.timer -= dt;
        if self.timer > 0.0 {
            return None;
        }

        let request = self.spawn_now(rng);
        self.timer = self.interval;
        Some(request)
    }

    /// Build a spawn request immediately, leaving the countdown alone
    pub fn spawn_now<R: Rng>(&self, rng: &mut R) -> SpawnRequest {
        let archetype = rng.random_range(0..self.archetype_count);
        let x = self.spawn_x.sample(rng);
        let position = Vec3::new(x, self.origin.y, self.origin.z);
        log::debug!("Spawn request: archetype {} at {}", archetype, position);
        SpawnRequest {
            archetype,
            position,
        }
    }

    /// Change the interval used at the next re-arm. The running countdown
    /// is not touched.
    pub fn set_spawn_interval(&mut self, interval: f32) {
        self.interval = interval.max(MIN_SPAWN_INTERVAL);
        log::info!("Spawn interval changed to {} seconds", self.interval);
    }
}
