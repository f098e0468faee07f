//! Blade/fruit contact detection
//!
//! Volumes are bounding spheres. Contacts are edge-triggered: a fruit is
//! reported once when it starts overlapping the blade, not on every frame
//! of continued overlap.

use std::collections::BTreeSet;

use glam::Vec3;

/// Check if two spheres intersect (touching counts)
#[inline]
pub fn spheres_overlap(a: Vec3, a_radius: f32, b: Vec3, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

/// Remembers which entities overlapped on the previous tick
#[derive(Debug, Clone, Default)]
pub struct ContactTracker {
    overlapping: BTreeSet<u32>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's overlapping ids; returns those that began
    /// overlapping this tick, in ascending id order.
    pub fn begin_contacts(&mut self, current: impl IntoIterator<Item = u32>) -> Vec<u32> {
        let current: BTreeSet<u32> = current.into_iter().collect();
        let began = current.difference(&self.overlapping).copied().collect();
        self.overlapping = current;
        began
    }

    /// Whether `id` was overlapping as of the last update
    pub fn is_overlapping(&self, id: u32) -> bool {
        self.overlapping.contains(&id)
    }
}
