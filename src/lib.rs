//! Starfall - a single-screen platformer session core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player motion, stars, bombs, session phase)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, asset loading and physics integration live outside this crate.
//! The physics engine plugs in through [`sim::PhysicsWorld`].

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`crate::Tuning`])
pub mod consts {
    /// Playfield dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 450.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;
    /// Horizontal run speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 160.0;
    /// Upward velocity set on jump (pixels/s, applied as -JUMP_IMPULSE)
    pub const JUMP_IMPULSE: f32 = 330.0;

    /// Star lattice
    pub const STAR_COUNT: usize = 12;
    pub const STAR_START_X: f32 = 12.0;
    pub const STAR_STEP_X: f32 = 70.0;
    pub const STAR_START_Y: f32 = 0.0;
    pub const STAR_BOUNCE_MIN: f32 = 0.4;
    pub const STAR_BOUNCE_MAX: f32 = 0.8;
    /// Points per star
    pub const STAR_POINTS: u32 = 10;

    /// Bomb defaults
    pub const BOMB_SPAWN_Y: f32 = 16.0;
    pub const BOMB_FALL_SPEED: f32 = 20.0;
    pub const BOMB_DRIFT_MAX: f32 = 200.0;
    pub const BOMB_BOUNCE: f32 = 1.0;
    /// Minimum distance between a fresh bomb and the playfield edge / midline
    pub const BOMB_SPAWN_INSET: f32 = 16.0;
}
