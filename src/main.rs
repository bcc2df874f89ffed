//! Tapioca entry point
//!
//! Runs a headless demo session with the built-in bot and reports the
//! result. A rendering host drives `sim::tick` the same way, feeding real
//! keyboard state into `TickInput` instead of setting `idle_mode`.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tapioca::config::Config;
use tapioca::consts::TICK_HZ;
use tapioca::highscores::HighScoreStore;
use tapioca::sim::{GameState, Scene, TickInput, tick};

const CONFIG_PATH: &str = "tapioca.json";
const HIGH_SCORE_PATH: &str = "highscore.dat";

/// Demo session cap, in seconds of simulated time
const DEMO_SECONDS: u32 = 120;

fn main() {
    env_logger::init();

    let config = Config::load(Path::new(CONFIG_PATH));
    let mut store = HighScoreStore::open(HIGH_SCORE_PATH);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    state.high_score = store.best();

    log::info!("Tapioca demo starting (seed {})", seed);

    let input = TickInput {
        idle_mode: true,
        ..TickInput::default()
    };
    for _ in 0..(TICK_HZ * DEMO_SECONDS) {
        tick(&mut state, &input, &config);
        if state.scene == Scene::GameOver {
            break;
        }
    }

    match state.loss {
        Some(cause) => println!(
            "game over ({cause:?}) after {} ticks - score {}, high score {}",
            state.time_ticks, state.score, state.high_score
        ),
        None => println!(
            "demo cap reached after {} ticks - score {}, high score {}",
            state.time_ticks, state.score, state.high_score
        ),
    }

    store.record(state.high_score);
    store.save();
}
