//! Fruit destruction paths
//!
//! A fruit dies exactly once: sliced by the blade, or dropped below the
//! kill plane. Both paths ignore fruit that is already dead.

use glam::Vec3;

use super::score::ScoreState;
use super::state::Fruit;

/// Display collaborator for cosmetic slice effects (fire-and-forget)
pub trait EffectSink {
    fn spawn_slice_effect(&mut self, archetype: usize, position: Vec3);
}

/// Slice a fruit. Returns true if this call killed it.
///
/// Missing collaborators degrade: no effect sink skips the effect, no score
/// state skips scoring. The fruit is still destroyed.
pub fn resolve_slice<E: EffectSink + ?Sized>(
    fruit: &mut Fruit,
    effects: Option<&mut E>,
    score: Option<&mut ScoreState>,
) -> bool {
    if !fruit.alive {
        return false;
    }

    let position = fruit.body.position;
    match effects {
        Some(sink) => sink.spawn_slice_effect(fruit.archetype, position),
        None => log::warn!("No slice effect sink; skipping effect for fruit {}", fruit.id),
    }

    match score {
        Some(score) => score.increase(1),
        None => log::warn!("No score state; fruit {} sliced without scoring", fruit.id),
    }

    fruit.alive = false;
    log::debug!("Sliced fruit {} at {}", fruit.id, position);
    true
}

/// Kill every live fruit below `destroy_y`, except those spawned on tick
/// `current_tick`. Returns the ids removed, in id order.
pub fn remove_fallen(fruits: &mut [Fruit], destroy_y: f32, current_tick: u64) -> Vec<u32> {
    let mut removed = Vec::new();
    for fruit in fruits.iter_mut() {
        if !fruit.alive || fruit.spawned_tick == current_tick {
            continue;
        }
        if fruit.body.position.y < destroy_y {
            fruit.alive = false;
            removed.push(fruit.id);
            log::debug!("Fruit {} fell out at y = {}", fruit.id, fruit.body.position.y);
        }
    }
    removed
}
