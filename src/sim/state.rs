//! Session state and core simulation types
//!
//! Everything a running session owns lives here. The render path reads a
//! [`SessionSnapshot`] instead of the live state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collectibles::{Collectible, CollectibleField};
use super::hazards::{Hazard, HazardSpawner};
use super::player::{AnimationLabel, Facing, PlayerController};
use super::score::ScoreCounter;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session. GameOver is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    #[default]
    Running,
    /// Simulation and physics frozen until toggled back
    Paused,
    /// Player hit a bomb
    GameOver,
}

/// Player visual state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerTint {
    #[default]
    Normal,
    /// Tinted red after a bomb hit
    Hit,
}

/// The player avatar as last reported by physics plus core-owned flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    /// Resting on a platform (physics feedback)
    pub grounded: bool,
    pub tint: PlayerTint,
    /// Last animation label handed to the renderer
    pub animation: AnimationLabel,
    pub bounce: f32,
}

impl Player {
    pub fn new(spawn: Vec2, bounce: f32) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            facing: Facing::Neutral,
            grounded: false,
            tint: PlayerTint::Normal,
            animation: AnimationLabel::Idle,
            bounce,
        }
    }
}

/// Something that happened during a tick, for the physics bridge and presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A star was picked up and disabled
    Collected { index: usize, points: u32 },
    /// A bomb entered play
    HazardSpawned { hazard: Hazard },
    /// Every star was reactivated at the top
    RespawnBatch,
    /// The player touched a bomb
    PlayerHit,
    PhaseChanged {
        from: SessionPhase,
        to: SessionPhase,
    },
}

/// Read-only copy of the session for a render path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub score: u64,
    pub time_ticks: u64,
    pub player: Player,
    pub collectibles: Vec<Collectible>,
    pub hazards: Vec<Hazard>,
}

/// Complete session state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Copied into the field, spawner and controller at build time
    pub(crate) tuning: Tuning,
    pub player: Player,
    pub collectibles: CollectibleField,
    pub hazards: HazardSpawner,
    pub(crate) phase: SessionPhase,
    pub(crate) score: ScoreCounter,
    pub(crate) controller: PlayerController,
    /// Ticks simulated while Running
    pub(crate) time_ticks: u64,
    /// Events produced since the last drain
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl SessionState {
    /// Create a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    /// Create a session with custom tuning
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let collectibles = CollectibleField::new(&tuning, &mut rng);
        let hazards = HazardSpawner::new(&tuning);
        let player = Player::new(tuning.player_spawn, tuning.player_bounce);
        let controller = PlayerController::new(tuning.player_speed, tuning.jump_impulse);

        log::info!(
            "Session started: seed {}, {} stars",
            seed,
            collectibles.len()
        );

        Self {
            seed,
            tuning,
            player,
            collectibles,
            hazards,
            phase: SessionPhase::Running,
            score: ScoreCounter::new(),
            controller,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Balance values the session was built with
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> &ScoreCounter {
        &self.score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Copy the state a renderer needs
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score.total(),
            time_ticks: self.time_ticks,
            player: self.player.clone(),
            collectibles: self.collectibles.iter().cloned().collect(),
            hazards: self.hazards.iter().cloned().collect(),
        }
    }

    /// Move to `to`, recording the change. Returns false if already there.
    pub(crate) fn transition(&mut self, to: SessionPhase) -> bool {
        let from = self.phase;
        if from == to {
            return false;
        }
        self.phase = to;
        log::info!("Session phase {:?} -> {:?}", from, to);
        self.events.push(GameEvent::PhaseChanged { from, to });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_session() {
        let state = SessionState::new(42);
        assert_eq!(state.phase(), SessionPhase::Running);
        assert_eq!(state.score().total(), 0);
        assert_eq!(state.collectibles.active_count(), STAR_COUNT);
        assert_eq!(state.hazards.active_count(), 0);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert_eq!(state.player.tint, PlayerTint::Normal);
    }

    #[test]
    fn test_same_seed_same_lattice() {
        let a = SessionState::new(9);
        let b = SessionState::new(9);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_with_tuning_validates() {
        let bad = Tuning {
            star_count: 0,
            ..Tuning::default()
        };
        assert!(SessionState::with_tuning(bad, 1).is_err());

        let small = Tuning {
            star_count: 3,
            ..Tuning::default()
        };
        let state = SessionState::with_tuning(small, 1).expect("valid tuning");
        assert_eq!(state.collectibles.len(), 3);
        assert_eq!(state.tuning().star_count, 3);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SessionState::new(5);
        let json = serde_json::to_string(&state.snapshot()).expect("snapshot serializes");
        let back: SessionSnapshot = serde_json::from_str(&json).expect("snapshot parses");
        assert_eq!(back, state.snapshot());
    }
}
