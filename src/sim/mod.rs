//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies; those sit behind collaborator traits

pub mod blade;
pub mod collision;
pub mod motion;
pub mod physics;
pub mod score;
pub mod slice;
pub mod spawner;
pub mod state;
pub mod tick;

pub use blade::{Blade, PerspectiveCamera, Viewpoint};
pub use collision::{ContactTracker, spheres_overlap};
pub use motion::{LaunchImpulse, MotionProfile};
pub use physics::{BallisticPhysics, Body, Physics};
pub use score::{ScoreChanged, ScoreState};
pub use slice::{EffectSink, remove_fallen, resolve_slice};
pub use spawner::{SpawnRequest, SpawnScheduler};
pub use state::{Fruit, GameEvent, ScoreDisplay, Session, SessionBuilder};
pub use tick::{TickInput, tick};
