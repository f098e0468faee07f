//! Per-frame simulation tick
//!
//! Order within a tick is fixed:
//! 1. spawner countdown (and spawn, if due)
//! 2. physics integration
//! 3. blade tracking and contact detection
//! 4. slice resolution
//! 5. fall-out removal
//! 6. score notifications to the display

use glam::Vec2;

use super::slice::{remove_fallen, resolve_slice};
use super::state::{GameEvent, Session};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in screen pixels (origin bottom-left). `None`
    /// leaves the blade where it is.
    pub pointer: Option<Vec2>,
}

/// Advance the session by `dt` seconds (scaled by the pause state)
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    let dt = dt * session.time_scale;
    if dt.is_nan() || dt <= 0.0 {
        return;
    }

    session.ticks += 1;
    let current = session.ticks;

    if let Some(request) = session.spawner.tick(dt, &mut session.rng) {
        session.spawn(request, current);
    }

    for fruit in &mut session.fruits {
        session.physics.integrate(&mut fruit.body, dt);
    }

    if let Some(pointer) = input.pointer {
        session.blade.update(pointer, &*session.viewpoint, dt);
    }

    // Contacts that began this tick
    let blade = &session.blade;
    let physics = &session.physics;
    let overlapping: Vec<u32> = session
        .fruits
        .iter()
        .filter(|f| f.alive)
        .filter(|f| physics.overlaps(blade.position, blade.radius, &f.body))
        .map(|f| f.id)
        .collect();
    let began = session.contacts.begin_contacts(overlapping);

    for id in began {
        let Some(fruit) = session.fruits.iter_mut().find(|f| f.id == id) else {
            continue;
        };
        if resolve_slice(fruit, session.effects.as_deref_mut(), Some(&mut session.score)) {
            session.events.push(GameEvent::Sliced {
                id,
                position: fruit.body.position,
            });
        }
    }

    for id in remove_fallen(&mut session.fruits, session.config.destroy_y, current) {
        session.events.push(GameEvent::FellOut { id });
    }

    session.fruits.retain(|f| f.alive);
    session.flush_score();
}
