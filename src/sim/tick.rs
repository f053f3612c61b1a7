//! Per-tick dispatch
//!
//! One call to [`SessionState::update`] per rendered frame. The phase gates
//! everything: GameOver and Paused ticks change nothing but the phase itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::{AnimationLabel, InputSignals, PlayerIntent};
use super::state::{GameEvent, PlayerTint, SessionPhase, SessionState};

/// Overlap/collision report from the physics collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionEvent {
    /// Player overlaps the star at `index`
    Collect { index: usize },
    /// Player overlaps a bomb
    HazardHit { hazard: u32 },
    /// A bomb left the playfield
    HazardLeftPlayfield { hazard: u32 },
}

/// Player body state as reported by physics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerFeedback {
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub signals: InputSignals,
    /// Pause toggle (UI control press)
    pub pause: bool,
    /// Latest player body state; `None` keeps the previous one
    pub feedback: Option<PlayerFeedback>,
}

/// What a tick hands back to the host
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    /// Velocity to apply to the player; `None` when nothing was simulated
    pub intent: Option<PlayerIntent>,
    pub animation: AnimationLabel,
    pub phase: SessionPhase,
    pub events: Vec<GameEvent>,
}

impl SessionState {
    /// Advance the session by one tick.
    ///
    /// Collision events are applied in delivery order. A bomb hit ends the
    /// session immediately and the remaining events of that tick are dropped.
    pub fn update(&mut self, input: &TickInput, collisions: &[CollisionEvent]) -> TickOutput {
        if input.pause {
            self.on_pause_toggle();
        }

        if self.phase != SessionPhase::Running {
            return self.finish(None);
        }

        self.time_ticks += 1;

        if let Some(feedback) = input.feedback {
            self.player.pos = feedback.pos;
            self.player.vel = feedback.vel;
            self.player.grounded = feedback.grounded;
        }

        let motion = self.controller.resolve(input.signals, self.player.grounded);
        self.player.facing = motion.facing;
        self.player.animation = motion.animation;
        self.player.vel.x = motion.intent.vx;
        if let Some(vy) = motion.intent.jump_vy {
            self.player.vel.y = vy;
        }

        for collision in collisions {
            if self.phase != SessionPhase::Running {
                log::debug!("Dropping {:?} after game over", collision);
                break;
            }
            match *collision {
                CollisionEvent::Collect { index } => {
                    self.on_collect(index);
                }
                CollisionEvent::HazardHit { .. } => {
                    self.on_hazard_hit();
                }
                CollisionEvent::HazardLeftPlayfield { hazard } => {
                    self.on_hazard_left(hazard);
                }
            }
        }

        let intent = self.is_running().then_some(motion.intent);
        self.finish(intent)
    }

    fn finish(&mut self, intent: Option<PlayerIntent>) -> TickOutput {
        TickOutput {
            intent,
            animation: self.player.animation,
            phase: self.phase,
            events: self.drain_events(),
        }
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Player picked up the star at `index`.
    ///
    /// Scores, drops a bomb on the far side of the player and, if the field
    /// is now empty, respawns every star. Returns false when nothing happened
    /// (not running, unknown index, or star already taken).
    pub fn on_collect(&mut self, index: usize) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(outcome) = self.collectibles.collect(index) else {
            return false;
        };

        let points = self.tuning.star_points;
        self.score.add(points);
        self.events.push(GameEvent::Collected { index, points });

        let hazard = self.hazards.spawn(self.player.pos.x, &mut self.rng);
        self.events.push(GameEvent::HazardSpawned { hazard });

        if outcome.batch_respawned {
            self.events.push(GameEvent::RespawnBatch);
        }
        true
    }

    /// Player touched a bomb: freeze everything for good
    pub fn on_hazard_hit(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.player.tint = PlayerTint::Hit;
        self.player.animation = AnimationLabel::Idle;
        self.player.vel = Vec2::ZERO;
        self.events.push(GameEvent::PlayerHit);
        log::info!(
            "Player hit after {} ticks, final score {}",
            self.time_ticks,
            self.score.total()
        );
        self.transition(SessionPhase::GameOver)
    }

    /// A bomb left the playfield
    pub fn on_hazard_left(&mut self, hazard: u32) -> bool {
        self.is_running() && self.hazards.retire(hazard)
    }

    /// Pause/resume control. No effect once the game is over.
    pub fn on_pause_toggle(&mut self) -> bool {
        match self.phase {
            SessionPhase::Running => self.pause(),
            SessionPhase::Paused => self.resume(),
            SessionPhase::GameOver => false,
        }
    }

    /// Freeze the session. A no-op unless Running.
    pub fn pause(&mut self) -> bool {
        self.phase == SessionPhase::Running && self.transition(SessionPhase::Paused)
    }

    /// Unfreeze the session. A no-op unless Paused.
    pub fn resume(&mut self) -> bool {
        self.phase == SessionPhase::Paused && self.transition(SessionPhase::Running)
    }
}
