//! Player motion state machine
//!
//! Maps the sampled directional input plus the physics "grounded" feedback
//! into a kinematic intent. Never touches score, stars or bombs.

use serde::{Deserialize, Serialize};

/// Pre-debounced directional input, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSignals {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Which way the player is heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    #[default]
    Neutral,
}

/// Animation state for the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationLabel {
    MoveLeft,
    MoveRight,
    #[default]
    Idle,
}

impl AnimationLabel {
    /// Animation key registered by the renderer
    pub fn key(&self) -> &'static str {
        match self {
            AnimationLabel::MoveLeft => "left",
            AnimationLabel::MoveRight => "right",
            AnimationLabel::Idle => "turn",
        }
    }
}

/// Velocity the physics collaborator should apply to the player body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerIntent {
    /// Horizontal velocity, one of {-V, 0, +V}
    pub vx: f32,
    /// Vertical velocity to set this tick (negative is up), if a jump fired
    pub jump_vy: Option<f32>,
}

impl PlayerIntent {
    /// Stand still, no jump
    pub const HOLD: PlayerIntent = PlayerIntent {
        vx: 0.0,
        jump_vy: None,
    };
}

/// Result of resolving one tick of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub intent: PlayerIntent,
    pub animation: AnimationLabel,
    pub facing: Facing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerController {
    speed: f32,
    jump_impulse: f32,
    /// Whether up+grounded held on the previous resolved tick
    jump_armed: bool,
}

impl PlayerController {
    pub fn new(speed: f32, jump_impulse: f32) -> Self {
        Self {
            speed,
            jump_impulse,
            jump_armed: false,
        }
    }

    /// Resolve one tick of input.
    ///
    /// Left wins when both directions are held. The jump fires only on the
    /// tick up+grounded first becomes true, so holding up never re-applies it
    /// while the body is still reported grounded.
    pub fn resolve(&mut self, signals: InputSignals, grounded: bool) -> Motion {
        let (vx, animation, facing) = if signals.left {
            (-self.speed, AnimationLabel::MoveLeft, Facing::Left)
        } else if signals.right {
            (self.speed, AnimationLabel::MoveRight, Facing::Right)
        } else {
            (0.0, AnimationLabel::Idle, Facing::Neutral)
        };

        let eligible = signals.up && grounded;
        let jump_vy = (eligible && !self.jump_armed).then_some(-self.jump_impulse);
        self.jump_armed = eligible;

        Motion {
            intent: PlayerIntent { vx, jump_vy },
            animation,
            facing,
        }
    }
}
