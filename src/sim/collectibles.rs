//! Star field: the fixed lattice of pickups and its respawn batch
//!
//! Stars are never created or destroyed after session start. A pickup only
//! flips the active flag; when the last active star goes, the whole lattice
//! comes back at the top in one step.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A single star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    /// Position in the field (stable identity)
    pub index: usize,
    /// Horizontal lattice slot, reused on every respawn
    pub slot_x: f32,
    pub pos: Vec2,
    pub active: bool,
    /// Vertical bounce coefficient, fixed at creation
    pub bounce: f32,
}

/// What a successful pickup did to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOutcome {
    pub index: usize,
    /// The pickup emptied the field and the whole lattice was reactivated
    pub batch_respawned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleField {
    stars: Vec<Collectible>,
    respawn_y: f32,
    /// Completed respawn batches
    batches: u32,
}

impl CollectibleField {
    /// Lay out the initial lattice: evenly spaced, all at the same height
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let stars = (0..tuning.star_count)
            .map(|index| {
                let slot_x = tuning.star_start_x + index as f32 * tuning.star_step_x;
                Collectible {
                    index,
                    slot_x,
                    pos: Vec2::new(slot_x, tuning.star_start_y),
                    active: true,
                    bounce: rng.random_range(tuning.star_bounce_min..tuning.star_bounce_max),
                }
            })
            .collect();

        Self {
            stars,
            respawn_y: tuning.star_start_y,
            batches: 0,
        }
    }

    /// Deactivate the star at `index`.
    ///
    /// Returns `None` (and changes nothing) for an out-of-range or already
    /// inactive index, so a repeated pickup can never score twice.
    pub fn collect(&mut self, index: usize) -> Option<CollectOutcome> {
        let Some(star) = self.stars.get_mut(index) else {
            log::debug!("Ignoring pickup of unknown star {}", index);
            return None;
        };
        if !star.active {
            log::trace!("Ignoring pickup of inactive star {}", index);
            return None;
        }
        star.active = false;

        let batch_respawned = self.active_count() == 0;
        if batch_respawned {
            self.respawn_batch();
        }

        Some(CollectOutcome {
            index,
            batch_respawned,
        })
    }

    /// Reactivate every star at its slot, back at the top
    fn respawn_batch(&mut self) {
        for star in &mut self.stars {
            star.pos = Vec2::new(star.slot_x, self.respawn_y);
            star.active = true;
        }
        self.batches += 1;
        log::info!("Star field cleared, respawn batch {}", self.batches);
    }

    pub fn active_count(&self) -> usize {
        self.stars.iter().filter(|s| s.active).count()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.stars.get(index).is_some_and(|s| s.active)
    }

    pub fn get(&self, index: usize) -> Option<&Collectible> {
        self.stars.get(index)
    }

    /// Mutable access so the physics collaborator can write back positions
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Collectible> {
        self.stars.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn batches(&self) -> u32 {
        self.batches
    }
}
