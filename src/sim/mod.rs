//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (stars by index, bombs by slot)
//! - No rendering or physics-engine dependencies

pub mod collectibles;
pub mod hazards;
pub mod level;
pub mod physics;
pub mod player;
pub mod score;
pub mod state;
pub mod tick;

pub use collectibles::{CollectOutcome, Collectible, CollectibleField};
pub use hazards::{Hazard, HazardSpawner, spawn_x};
pub use level::{PLATFORMS, Platform};
pub use physics::{HeadlessWorld, PhysicsWorld, install, step};
pub use player::{AnimationLabel, Facing, InputSignals, Motion, PlayerController, PlayerIntent};
pub use score::ScoreCounter;
pub use state::{GameEvent, Player, PlayerTint, SessionPhase, SessionSnapshot, SessionState};
pub use tick::{CollisionEvent, PlayerFeedback, TickInput, TickOutput};
