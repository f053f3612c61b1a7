//! Bomb spawner
//!
//! Bombs appear only as a side effect of a star pickup. Each spawn is a new,
//! independent bomb; retired slots are recycled under a fresh id.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A falling bomb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
    pub bounce: f32,
}

/// Horizontal spawn position for a bomb triggered by a player at `origin_x`.
///
/// Mirrors the player across the midline and keeps the result on the far
/// half, at least `inset` away from both the midline and the wall. The
/// inset is capped at a quarter of the width; a NaN origin lands on the
/// midline.
pub fn spawn_x(origin_x: f32, width: f32, inset: f32) -> f32 {
    let width = width.max(0.0);
    let mid = width / 2.0;
    if origin_x.is_nan() {
        return mid;
    }
    let inset = inset.max(0.0).min(width / 4.0);
    let x = origin_x.max(0.0).min(width);
    let mirrored = width - x;
    if x < mid {
        mirrored.max(mid + inset).min(width - inset)
    } else {
        mirrored.max(inset).min(mid - inset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardSpawner {
    hazards: Vec<Hazard>,
    next_id: u32,
    width: f32,
    inset: f32,
    spawn_y: f32,
    fall_speed: f32,
    drift_max: f32,
    bounce: f32,
}

impl HazardSpawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            hazards: Vec::new(),
            next_id: 1,
            width: tuning.world_width,
            inset: tuning.bomb_spawn_inset,
            spawn_y: tuning.bomb_spawn_y,
            fall_speed: tuning.bomb_fall_speed,
            drift_max: tuning.bomb_drift_max,
            bounce: tuning.bomb_bounce,
        }
    }

    fn next_hazard_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop a new bomb at the top, on the side away from `origin_x`
    pub fn spawn<R: Rng>(&mut self, origin_x: f32, rng: &mut R) -> Hazard {
        let drift = if self.drift_max > 0.0 {
            rng.random_range(-self.drift_max..self.drift_max)
        } else {
            0.0
        };
        let hazard = Hazard {
            id: self.next_hazard_id(),
            pos: Vec2::new(spawn_x(origin_x, self.width, self.inset), self.spawn_y),
            vel: Vec2::new(drift, self.fall_speed),
            active: true,
            bounce: self.bounce,
        };
        log::debug!(
            "Bomb {} spawned at ({:.1}, {:.1}) drift {:.1} (player x {:.1})",
            hazard.id,
            hazard.pos.x,
            hazard.pos.y,
            drift,
            origin_x
        );

        match self.hazards.iter_mut().find(|h| !h.active) {
            Some(slot) => *slot = hazard.clone(),
            None => self.hazards.push(hazard.clone()),
        }
        hazard
    }

    /// Retire a bomb that left the playfield. Unknown or retired ids are ignored.
    pub fn retire(&mut self, id: u32) -> bool {
        match self.hazards.iter_mut().find(|h| h.active && h.id == id) {
            Some(hazard) => {
                hazard.active = false;
                log::trace!("Bomb {} retired", id);
                true
            }
            None => {
                log::debug!("Ignoring retire of unknown bomb {}", id);
                false
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<&Hazard> {
        self.hazards.iter().find(|h| h.active && h.id == id)
    }

    /// Mutable access so the physics collaborator can write back motion
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Hazard> {
        self.hazards.iter_mut().find(|h| h.active && h.id == id)
    }

    /// Active bombs
    pub fn iter(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards.iter().filter(|h| h.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter().count()
    }

    /// Total bombs ever spawned this session
    pub fn spawned(&self) -> u32 {
        self.next_id - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::consts::*;

    #[test]
    fn test_spawn_x_opposite_half() {
        let mid = WORLD_WIDTH / 2.0;
        for origin in [0.0, 12.0, 100.0, 399.0, 400.0, 401.0, 650.0, 800.0] {
            let x = spawn_x(origin, WORLD_WIDTH, BOMB_SPAWN_INSET);
            if origin < mid {
                assert!(x > mid, "origin {origin} -> {x}");
            } else {
                assert!(x < mid, "origin {origin} -> {x}");
            }
            assert!((BOMB_SPAWN_INSET..=WORLD_WIDTH - BOMB_SPAWN_INSET).contains(&x));
        }
        // Deterministic
        assert_eq!(spawn_x(100.0, WORLD_WIDTH, 16.0), 700.0);
        assert_eq!(spawn_x(700.0, WORLD_WIDTH, 16.0), 100.0);
    }

    #[test]
    fn test_spawn_x_degenerate_inputs() {
        // Inset wider than half the playfield is capped, not a panic
        let x = spawn_x(100.0, WORLD_WIDTH, 500.0);
        assert_eq!(x, WORLD_WIDTH * 0.75);
        assert_eq!(spawn_x(700.0, WORLD_WIDTH, 500.0), WORLD_WIDTH * 0.25);

        assert_eq!(spawn_x(f32::NAN, WORLD_WIDTH, BOMB_SPAWN_INSET), WORLD_WIDTH / 2.0);
        assert_eq!(spawn_x(f32::INFINITY, WORLD_WIDTH, BOMB_SPAWN_INSET), BOMB_SPAWN_INSET);
        assert_eq!(spawn_x(-50.0, WORLD_WIDTH, f32::NAN), WORLD_WIDTH);
        assert_eq!(spawn_x(10.0, -1.0, BOMB_SPAWN_INSET), 0.0);
    }

    #[test]
    fn test_unvalidated_tuning_spawns() {
        let tuning = Tuning {
            bomb_spawn_inset: 1000.0,
            ..Tuning::default()
        };
        let mut spawner = HazardSpawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(4);
        let hazard = spawner.spawn(f32::NAN, &mut rng);
        assert_eq!(hazard.pos.x, WORLD_WIDTH / 2.0);
    }

    #[test]
    fn test_spawn_is_never_coalesced() {
        let mut spawner = HazardSpawner::new(&Tuning::default());
        let mut rng = Pcg32::seed_from_u64(1);

        let a = spawner.spawn(100.0, &mut rng);
        let b = spawner.spawn(100.0, &mut rng);
        assert_ne!(a.id, b.id);
        assert_eq!(spawner.active_count(), 2);

        for hazard in spawner.iter() {
            assert_eq!(hazard.pos.y, BOMB_SPAWN_Y);
            assert_eq!(hazard.vel.y, BOMB_FALL_SPEED);
            assert!(hazard.vel.x >= -BOMB_DRIFT_MAX && hazard.vel.x < BOMB_DRIFT_MAX);
        }
    }

    #[test]
    fn test_retire_recycles_slot() {
        let mut spawner = HazardSpawner::new(&Tuning::default());
        let mut rng = Pcg32::seed_from_u64(2);

        let a = spawner.spawn(500.0, &mut rng);
        assert!(spawner.retire(a.id));
        assert!(!spawner.retire(a.id));
        assert!(!spawner.retire(999));
        assert_eq!(spawner.active_count(), 0);

        let b = spawner.spawn(500.0, &mut rng);
        assert_ne!(a.id, b.id);
        assert_eq!(spawner.hazards.len(), 1);
        assert_eq!(spawner.spawned(), 2);
        assert!(spawner.get(a.id).is_none());
        assert!(spawner.get(b.id).is_some());
    }

    #[test]
    fn test_zero_drift() {
        let tuning = Tuning {
            bomb_drift_max: 0.0,
            ..Tuning::default()
        };
        let mut spawner = HazardSpawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(spawner.spawn(10.0, &mut rng).vel.x, 0.0);
    }
}
