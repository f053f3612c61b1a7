//! Starfall headless runner
//!
//! Plays a scripted session against the in-memory physics world and prints
//! the final snapshot as JSON.
//!
//! Usage: `starfall [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use starfall::Tuning;
    use starfall::sim::SessionState;

    env_logger::init();
    log::info!("Starfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);

    let state = match SessionState::with_tuning(tuning, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let state = demo::run(state);
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Snapshot serialization failed: {}", e),
    }
    println!("{}", state.score().label());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the crate is consumed as a library there
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use starfall::sim::{
        CollisionEvent, GameEvent, HeadlessWorld, InputSignals, SessionState, install, step,
    };

    const RUN_RIGHT: InputSignals = InputSignals {
        left: false,
        right: true,
        up: false,
    };

    /// Sweep the field twice, pause once, then walk into the newest bomb
    pub fn run(mut state: SessionState) -> SessionState {
        let mut world = HeadlessWorld::new();
        install(&state, &mut world);
        world.player.grounded = true;

        let mut newest_bomb = None;
        for sweep in 0..2 {
            let slots: Vec<(usize, f32)> = state
                .collectibles
                .iter()
                .map(|s| (s.index, s.slot_x))
                .collect();
            for (index, x) in slots {
                world.player.pos.x = x;
                world.queue(CollisionEvent::Collect { index });
                let out = step(&mut state, RUN_RIGHT, false, &mut world);
                for event in &out.events {
                    if let GameEvent::HazardSpawned { hazard } = event {
                        newest_bomb = Some(hazard.id);
                    }
                }
            }
            log::info!(
                "Sweep {} done: score {}, {} bombs in play",
                sweep + 1,
                state.score().total(),
                state.hazards.active_count()
            );
        }

        // Pause, try to sneak a pickup in, resume
        step(&mut state, InputSignals::default(), true, &mut world);
        world.queue(CollisionEvent::Collect { index: 0 });
        step(&mut state, RUN_RIGHT, false, &mut world);
        step(&mut state, InputSignals::default(), true, &mut world);

        if let Some(hazard) = newest_bomb {
            world.queue(CollisionEvent::HazardHit { hazard });
        }
        // Pending pickup and the hit land on the same tick
        let out = step(&mut state, RUN_RIGHT, false, &mut world);
        log::info!(
            "Final phase {:?} after {} ticks, playing \"{}\"",
            out.phase,
            state.time_ticks(),
            out.animation.key()
        );
        state
    }
}
