//! Data-driven game balance
//!
//! Loaded from JSON. Every field has a default, so a file only needs the
//! values it wants to change.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure while loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance values for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    pub player_spawn: Vec2,
    pub player_bounce: f32,
    /// Horizontal run speed (V)
    pub player_speed: f32,
    /// Jump impulse magnitude (J); the intent carries -J
    pub jump_impulse: f32,

    // === Stars ===
    pub star_count: usize,
    pub star_start_x: f32,
    pub star_step_x: f32,
    /// Height every star (re)spawns at
    pub star_start_y: f32,
    pub star_bounce_min: f32,
    pub star_bounce_max: f32,
    pub star_points: u32,

    // === Bombs ===
    pub bomb_spawn_y: f32,
    pub bomb_fall_speed: f32,
    /// Drift is drawn from [-bomb_drift_max, bomb_drift_max)
    pub bomb_drift_max: f32,
    pub bomb_bounce: f32,
    pub bomb_spawn_inset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_spawn: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            player_bounce: PLAYER_BOUNCE,
            player_speed: PLAYER_SPEED,
            jump_impulse: JUMP_IMPULSE,

            star_count: STAR_COUNT,
            star_start_x: STAR_START_X,
            star_step_x: STAR_STEP_X,
            star_start_y: STAR_START_Y,
            star_bounce_min: STAR_BOUNCE_MIN,
            star_bounce_max: STAR_BOUNCE_MAX,
            star_points: STAR_POINTS,

            bomb_spawn_y: BOMB_SPAWN_Y,
            bomb_fall_speed: BOMB_FALL_SPEED,
            bomb_drift_max: BOMB_DRIFT_MAX,
            bomb_bounce: BOMB_BOUNCE,
            bomb_spawn_inset: BOMB_SPAWN_INSET,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that the values describe a playable session
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.world_width > 0.0) {
            return invalid("world_width", "must be positive");
        }
        if !(self.world_height > 0.0) {
            return invalid("world_height", "must be positive");
        }
        if self.star_count == 0 {
            return invalid("star_count", "must be at least 1");
        }
        if !(self.star_bounce_min < self.star_bounce_max) {
            return invalid("star_bounce_min", "must be below star_bounce_max");
        }
        if !(self.bomb_drift_max >= 0.0) {
            return invalid("bomb_drift_max", "must not be negative");
        }
        if !(self.player_speed >= 0.0) {
            return invalid("player_speed", "must not be negative");
        }
        if !(self.jump_impulse >= 0.0) {
            return invalid("jump_impulse", "must not be negative");
        }
        if !(self.bomb_fall_speed >= 0.0) {
            return invalid("bomb_fall_speed", "must not be negative");
        }
        if !(self.bomb_spawn_inset >= 0.0 && self.bomb_spawn_inset * 4.0 < self.world_width) {
            return invalid("bomb_spawn_inset", "must be under a quarter of world_width");
        }
        Ok(())
    }
}
