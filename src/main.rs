//! Headless demo driver
//!
//! Runs the sim at the fixed tick rate with a scripted input pattern and
//! logs progress once a second. Real drivers replace this file: sample
//! input devices, call `tick`, draw a `Snapshot`.

use skitter::consts::TICK_HZ;
use skitter::sim::{GameState, TickInput, World, tick};
use skitter::tuning::Tuning;
use skitter::view::Snapshot;

/// Scripted wandering input: sweep the yard in a loose figure.
fn scripted_input(tick_no: u64) -> TickInput {
    let phase = (tick_no / 90) % 4;
    TickInput {
        right: phase == 0 || phase == 1,
        down: phase == 1 || phase == 2,
        left: phase == 2 || phase == 3,
        up: phase == 3 || phase == 0,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut state = match GameState::new(seed, World::demo_yard(), Tuning::default()) {
        Ok(state) => state,
        Err(err) => {
            log::error!("session setup failed: {err}");
            std::process::exit(1);
        }
    };
    log::info!("session started (seed {seed})");

    let max_ticks = 60 * u64::from(TICK_HZ);
    for i in 0..max_ticks {
        tick(&mut state, &scripted_input(i));

        if state.time_ticks % u64::from(TICK_HZ) == 0 {
            let snap = Snapshot::capture(&state);
            log::info!(
                "t={:>3}s score={} feedings={} sprites={}",
                state.time_ticks / u64::from(TICK_HZ),
                snap.score,
                snap.feedings,
                snap.sprites.len(),
            );
        }

        if let Some(cause) = state.defeated {
            log::info!(
                "defeated after {} ticks: {:?} (score {}, feedings {})",
                state.time_ticks,
                cause,
                state.score,
                state.feedings
            );
            return;
        }
    }

    log::info!(
        "survived the full run: score {}, feedings {}",
        state.score,
        state.feedings
    );
}
