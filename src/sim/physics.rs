//! Physics collaborator bridge
//!
//! The session never integrates motion. A physics engine implements
//! [`PhysicsWorld`]; [`step`] pulls its overlap reports once per tick, runs
//! the session, then pushes the results back (player velocity, new bombs,
//! disabled and respawned stars, time-step gating).

use super::collectibles::Collectible;
use super::hazards::Hazard;
use super::level::{PLATFORMS, Platform};
use super::player::{InputSignals, PlayerIntent};
use super::state::{GameEvent, Player, PlayerTint, SessionPhase, SessionState};
use super::tick::{CollisionEvent, PlayerFeedback, TickInput, TickOutput};

/// Capabilities the session needs from a physics engine
pub trait PhysicsWorld {
    /// Place a static platform body
    fn add_platform(&mut self, platform: &Platform);
    /// Create the player body
    fn add_player(&mut self, player: &Player);
    /// Create or reset the star body at `star.index`
    fn enable_star(&mut self, star: &Collectible);
    /// Hide and stop simulating a star
    fn disable_star(&mut self, index: usize);
    /// Create a bomb body
    fn add_hazard(&mut self, hazard: &Hazard);
    /// Current player body state
    fn player_feedback(&self) -> PlayerFeedback;
    /// Overlap reports since the previous call
    fn drain_collisions(&mut self) -> Vec<CollisionEvent>;
    fn apply_player_intent(&mut self, intent: &PlayerIntent);
    fn set_player_tint(&mut self, tint: PlayerTint);
    /// Stop or restart the engine's own time-stepping
    fn set_paused(&mut self, paused: bool);
}

/// Build the scene in the physics world for a fresh session
pub fn install<W: PhysicsWorld>(state: &SessionState, world: &mut W) {
    for platform in &PLATFORMS {
        world.add_platform(platform);
    }
    world.add_player(&state.player);
    for star in state.collectibles.iter() {
        world.enable_star(star);
    }
}

/// Run one tick against a physics world.
///
/// The pause toggle lands before the world is drained, so overlap reports
/// stay queued in the world until a tick that actually simulates.
pub fn step<W: PhysicsWorld>(
    state: &mut SessionState,
    signals: InputSignals,
    pause: bool,
    world: &mut W,
) -> TickOutput {
    if pause {
        state.on_pause_toggle();
    }
    let collisions = if state.is_running() {
        world.drain_collisions()
    } else {
        Vec::new()
    };
    let input = TickInput {
        signals,
        pause: false,
        feedback: Some(world.player_feedback()),
    };
    let output = state.update(&input, &collisions);

    if let Some(intent) = &output.intent {
        world.apply_player_intent(intent);
    }
    for event in &output.events {
        apply_event(state, world, event);
    }
    output
}

fn apply_event<W: PhysicsWorld>(state: &SessionState, world: &mut W, event: &GameEvent) {
    match event {
        GameEvent::Collected { index, .. } => world.disable_star(*index),
        GameEvent::HazardSpawned { hazard } => world.add_hazard(hazard),
        GameEvent::RespawnBatch => {
            for star in state.collectibles.iter() {
                world.enable_star(star);
            }
        }
        GameEvent::PlayerHit => world.set_player_tint(PlayerTint::Hit),
        GameEvent::PhaseChanged { to, .. } => world.set_paused(*to != SessionPhase::Running),
    }
}

/// Scripted in-memory world for headless runs and tests.
///
/// Bodies never move on their own: positions change only when the script
/// writes them, and queued overlap reports are delivered on the next
/// unpaused tick.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWorld {
    pub player: PlayerFeedback,
    pub player_tint: PlayerTint,
    pub last_intent: Option<PlayerIntent>,
    pub platforms: Vec<Platform>,
    pub stars: Vec<Collectible>,
    pub hazards: Vec<Hazard>,
    pub paused: bool,
    queued: Vec<CollisionEvent>,
}

impl HeadlessWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an overlap report for the next tick
    pub fn queue(&mut self, event: CollisionEvent) {
        self.queued.push(event);
    }

    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    pub fn enabled_stars(&self) -> usize {
        self.stars.iter().filter(|s| s.active).count()
    }
}

impl PhysicsWorld for HeadlessWorld {
    fn add_platform(&mut self, platform: &Platform) {
        self.platforms.push(*platform);
    }

    fn add_player(&mut self, player: &Player) {
        self.player = PlayerFeedback {
            pos: player.pos,
            vel: player.vel,
            grounded: player.grounded,
        };
        self.player_tint = player.tint;
    }

    fn enable_star(&mut self, star: &Collectible) {
        match self.stars.iter_mut().find(|s| s.index == star.index) {
            Some(existing) => *existing = star.clone(),
            None => self.stars.push(star.clone()),
        }
    }

    fn disable_star(&mut self, index: usize) {
        if let Some(star) = self.stars.iter_mut().find(|s| s.index == index) {
            star.active = false;
        }
    }

    fn add_hazard(&mut self, hazard: &Hazard) {
        self.hazards.push(hazard.clone());
    }

    fn player_feedback(&self) -> PlayerFeedback {
        self.player
    }

    fn drain_collisions(&mut self) -> Vec<CollisionEvent> {
        if self.paused {
            return Vec::new();
        }
        std::mem::take(&mut self.queued)
    }

    fn apply_player_intent(&mut self, intent: &PlayerIntent) {
        self.player.vel.x = intent.vx;
        if let Some(vy) = intent.jump_vy {
            self.player.vel.y = vy;
        }
        self.last_intent = Some(*intent);
    }

    fn set_player_tint(&mut self, tint: PlayerTint) {
        self.player_tint = tint;
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn setup(seed: u64) -> (SessionState, HeadlessWorld) {
        let state = SessionState::new(seed);
        let mut world = HeadlessWorld::new();
        install(&state, &mut world);
        (state, world)
    }

    #[test]
    fn test_install_builds_scene() {
        let (_, world) = setup(1);
        assert_eq!(world.platforms.len(), PLATFORMS.len());
        assert_eq!(world.enabled_stars(), STAR_COUNT);
        assert_eq!(world.player.pos, Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    }

    #[test]
    fn test_collect_syncs_world() {
        let (mut state, mut world) = setup(1);
        world.player.pos.x = 650.0;
        world.queue(CollisionEvent::Collect { index: 2 });

        step(&mut state, InputSignals::default(), false, &mut world);
        assert_eq!(world.enabled_stars(), STAR_COUNT - 1);
        assert_eq!(world.hazards.len(), 1);
        // Player on the right half: bomb on the left
        assert_eq!(world.hazards[0].pos.x, 150.0);
    }

    #[test]
    fn test_respawn_syncs_world() {
        let (mut state, mut world) = setup(2);
        for index in 0..STAR_COUNT {
            world.queue(CollisionEvent::Collect { index });
        }
        step(&mut state, InputSignals::default(), false, &mut world);
        assert_eq!(world.enabled_stars(), STAR_COUNT);
        assert_eq!(world.hazards.len(), STAR_COUNT);
        assert_eq!(state.score().total(), STAR_POINTS as u64 * STAR_COUNT as u64);
    }

    #[test]
    fn test_pause_gates_physics() {
        let (mut state, mut world) = setup(3);
        step(&mut state, InputSignals::default(), true, &mut world);
        assert!(world.paused);

        world.queue(CollisionEvent::Collect { index: 0 });
        step(&mut state, InputSignals::default(), false, &mut world);
        assert_eq!(world.pending(), 1);
        assert_eq!(state.score().total(), 0);

        // Resume: the queued overlap arrives on the following tick
        step(&mut state, InputSignals::default(), true, &mut world);
        assert!(!world.paused);
        step(&mut state, InputSignals::default(), false, &mut world);
        assert_eq!(state.score().total(), 10);
    }

    #[test]
    fn test_reports_survive_pause_tick() {
        let (mut state, mut world) = setup(6);
        world.queue(CollisionEvent::Collect { index: 0 });
        step(&mut state, InputSignals::default(), false, &mut world);
        let bomb = world.hazards[0].id;

        // Reports queued on the same tick the pause lands
        world.queue(CollisionEvent::HazardLeftPlayfield { hazard: bomb });
        world.queue(CollisionEvent::Collect { index: 1 });
        let out = step(&mut state, InputSignals::default(), true, &mut world);
        assert_eq!(out.phase, SessionPhase::Paused);
        assert_eq!(world.pending(), 2);
        assert_eq!(state.hazards.active_count(), 1);
        assert_eq!(state.score().total(), 10);

        step(&mut state, InputSignals::default(), true, &mut world);
        step(&mut state, InputSignals::default(), false, &mut world);
        assert_eq!(world.pending(), 0);
        assert!(state.hazards.get(bomb).is_none());
        assert_eq!(state.score().total(), 20);
    }

    #[test]
    fn test_hit_stops_physics_for_good() {
        let (mut state, mut world) = setup(4);
        world.queue(CollisionEvent::HazardHit { hazard: 1 });
        let out = step(&mut state, InputSignals::default(), false, &mut world);
        assert_eq!(out.phase, SessionPhase::GameOver);
        assert!(world.paused);
        assert_eq!(world.player_tint, PlayerTint::Hit);

        step(&mut state, InputSignals::default(), true, &mut world);
        assert!(world.paused);
    }

    #[test]
    fn test_intent_applied() {
        let (mut state, mut world) = setup(5);
        world.player.grounded = true;
        let signals = InputSignals {
            left: true,
            right: false,
            up: true,
        };
        step(&mut state, signals, false, &mut world);
        assert_eq!(world.player.vel, Vec2::new(-PLAYER_SPEED, -JUMP_IMPULSE));
    }
}
