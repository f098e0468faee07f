//! Session state and core simulation types
//!
//! A `Session` owns everything one play session needs: the score, the
//! spawner, the blade, the live fruit and the collaborators they talk to.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::blade::{Blade, PerspectiveCamera, Viewpoint};
use super::collision::ContactTracker;
use super::physics::{BallisticPhysics, Body, Physics};
use super::score::ScoreState;
use super::slice::{EffectSink, resolve_slice};
use super::spawner::{SpawnRequest, SpawnScheduler};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// A spawned fruit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    /// Index into the configured archetype set
    pub archetype: usize,
    pub body: Body,
    /// Cleared exactly once, when the fruit is sliced or falls out
    pub alive: bool,
    /// Tick the fruit appeared on; exempt from fall-out until the next one
    pub spawned_tick: u64,
}

/// Things that happened during a tick, for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned {
        id: u32,
        archetype: usize,
        position: Vec3,
    },
    Sliced {
        id: u32,
        position: Vec3,
    },
    FellOut {
        id: u32,
    },
    ScoreChanged {
        score: u32,
    },
}

/// Display collaborator for the score text
pub trait ScoreDisplay {
    fn show_score(&mut self, score: u32);
}

/// Builds a `Session`, checking configuration and collaborators
pub struct SessionBuilder {
    config: GameConfig,
    seed: u64,
    physics: Option<Box<dyn Physics>>,
    viewpoint: Option<Box<dyn Viewpoint>>,
    effects: Option<Box<dyn EffectSink>>,
    display: Option<Box<dyn ScoreDisplay>>,
}

impl SessionBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seed: 0,
            physics: None,
            viewpoint: None,
            effects: None,
            display: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn physics(mut self, physics: impl Physics + 'static) -> Self {
        self.physics = Some(Box::new(physics));
        self
    }

    pub fn viewpoint(mut self, viewpoint: impl Viewpoint + 'static) -> Self {
        self.viewpoint = Some(Box::new(viewpoint));
        self
    }

    pub fn effects(mut self, effects: impl EffectSink + 'static) -> Self {
        self.effects = Some(Box::new(effects));
        self
    }

    pub fn display(mut self, display: impl ScoreDisplay + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    /// Built-in integrator and default camera
    pub fn with_default_collaborators(self) -> Self {
        let physics = BallisticPhysics::from_config(&self.config);
        self.physics(physics).viewpoint(PerspectiveCamera::default())
    }

    pub fn build(self) -> Result<Session, ConfigError> {
        self.config.validate()?;
        let physics = self
            .physics
            .ok_or(ConfigError::MissingCollaborator("physics"))?;
        let viewpoint = self
            .viewpoint
            .ok_or(ConfigError::MissingCollaborator("viewpoint"))?;

        if self.effects.is_none() {
            log::warn!("No slice effect sink attached; slices will have no effect");
        }
        let spawner = SpawnScheduler::new(&self.config)?;
        let blade_start = viewpoint.unproject(Vec2::ZERO, self.config.blade.depth);
        let blade = Blade::new(&self.config.blade, blade_start);

        let mut display = self.display;
        let score = ScoreState::new();
        match display.as_mut() {
            Some(display) => display.show_score(score.score()),
            None => log::warn!("No score display attached; score changes will not be shown"),
        }

        log::info!(
            "Session created with seed {} ({} archetypes, spawn every {}s)",
            self.seed,
            self.config.archetypes.len(),
            self.config.spawn_interval
        );

        Ok(Session {
            seed: self.seed,
            rng: Pcg32::seed_from_u64(self.seed),
            score,
            spawner,
            blade,
            fruits: Vec::new(),
            contacts: ContactTracker::new(),
            events: Vec::new(),
            time_scale: 1.0,
            ticks: 0,
            next_id: 1,
            physics,
            viewpoint,
            effects: self.effects,
            display,
            config: self.config,
        })
    }
}

/// One play session
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) score: ScoreState,
    pub(crate) spawner: SpawnScheduler,
    pub(crate) blade: Blade,
    /// Live fruit, sorted by id
    pub(crate) fruits: Vec<Fruit>,
    pub(crate) contacts: ContactTracker,
    pub(crate) events: Vec<GameEvent>,
    /// 1.0 while running, 0.0 while paused
    pub(crate) time_scale: f32,
    /// Completed ticks
    pub(crate) ticks: u64,
    next_id: u32,
    pub(crate) physics: Box<dyn Physics>,
    pub(crate) viewpoint: Box<dyn Viewpoint>,
    pub(crate) effects: Option<Box<dyn EffectSink>>,
    pub(crate) display: Option<Box<dyn ScoreDisplay>>,
    pub(crate) config: GameConfig,
}

impl Session {
    pub fn builder(config: GameConfig) -> SessionBuilder {
        SessionBuilder::new(config)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn blade(&self) -> &Blade {
        &self.blade
    }

    pub fn spawner(&self) -> &SpawnScheduler {
        &self.spawner
    }

    /// Live fruit, sorted by id
    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    pub fn fruit(&self, id: u32) -> Option<&Fruit> {
        self.fruits.iter().find(|f| f.id == id)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }

    /// Hand accumulated events to the display layer
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn start_game(&mut self) {
        self.score.start();
        self.flush_score();
    }

    pub fn end_game(&mut self) {
        self.score.end();
        self.flush_score();
    }

    /// Award points outside the slice path. Ignored while the game is over.
    pub fn increase_score(&mut self, amount: u32) {
        self.score.increase(amount);
        self.flush_score();
    }

    /// Penalize the player, clamping at zero. Ignored while the game is over.
    pub fn decrease_score(&mut self, amount: u32) {
        self.score.decrease(amount);
        self.flush_score();
    }

    pub fn reset_score(&mut self) {
        self.score.reset();
        self.flush_score();
    }

    pub fn pause(&mut self) {
        self.time_scale = 0.0;
        log::info!("Game paused");
    }

    pub fn resume(&mut self) {
        self.time_scale = 1.0;
        log::info!("Game resumed");
    }

    pub fn set_spawn_interval(&mut self, interval: f32) {
        self.spawner.set_spawn_interval(interval);
    }

    /// Spawn a random fruit right now, outside the countdown
    pub fn spawn_now(&mut self) -> u32 {
        let request = self.spawner.spawn_now(&mut self.rng);
        self.spawn(request, self.ticks)
    }

    /// Spawn a specific archetype at a specific position. Returns `None`
    /// for an archetype index outside the configured set.
    pub fn spawn_at(&mut self, archetype: usize, position: Vec3) -> Option<u32> {
        if archetype >= self.config.archetypes.len() {
            log::warn!(
                "Unknown archetype {} ({} configured); nothing spawned",
                archetype,
                self.config.archetypes.len()
            );
            return None;
        }
        Some(self.spawn(SpawnRequest { archetype, position }, self.ticks))
    }

    /// Slice a fruit reported by an external contact source. Unknown or
    /// already dead ids are ignored.
    pub fn slice(&mut self, id: u32) -> bool {
        let Some(fruit) = self.fruits.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        let sliced = resolve_slice(fruit, self.effects.as_deref_mut(), Some(&mut self.score));
        if sliced {
            self.events.push(GameEvent::Sliced {
                id,
                position: fruit.body.position,
            });
            self.fruits.retain(|f| f.alive);
            self.flush_score();
        }
        sliced
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a fruit from a spawn request and launch it
    pub(crate) fn spawn(&mut self, request: SpawnRequest, tick: u64) -> u32 {
        let id = self.next_entity_id();
        let archetype = &self.config.archetypes[request.archetype];
        let motion = *self.config.motion_for(request.archetype);
        let mut body = Body::at_rest(request.position, archetype.mass, archetype.radius);

        let launch = match self.config.spawner_launch_force {
            Some(range) => {
                let force = Vec3::Y * range.sample(&mut self.rng);
                motion.with_force(force, &mut self.rng)
            }
            None => motion.sample(&mut self.rng),
        };
        self.physics.apply_impulse(&mut body, launch.force);
        self.physics.apply_torque_impulse(&mut body, launch.torque);

        log::debug!(
            "{} {} launched with force: {}",
            archetype.name,
            id,
            launch.force.length()
        );

        self.fruits.push(Fruit {
            id,
            archetype: request.archetype,
            body,
            alive: true,
            spawned_tick: tick,
        });
        self.events.push(GameEvent::Spawned {
            id,
            archetype: request.archetype,
            position: request.position,
        });
        id
    }

    /// Forward queued score notifications to the display
    pub(crate) fn flush_score(&mut self) {
        for change in self.score.take_notifications() {
            match self.display.as_mut() {
                Some(display) => display.show_score(change.score),
                None => log::warn!("Score display not attached; score is {}", change.score),
            }
            self.events.push(GameEvent::ScoreChanged {
                score: change.score,
            });
        }
    }
}
