//! Scripted sessions without a display
//!
//! Drives a [`Game`] with a simple autopilot and a recording painter, for
//! smoke runs from the command line and for tests.

use serde::Serialize;

use crate::game::Game;
use crate::sim::{GameState, RecordingPainter};
use crate::tuning::Tuning;

/// Frames between fire taps
const FIRE_PERIOD: u64 = 8;
/// Horizontal slack before the pilot bothers steering
const STEER_DEADZONE: f32 = 4.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub final_score: u32,
    pub best_score: u32,
    pub kills: u32,
    pub game_overs: u32,
    pub restarts: u32,
    pub draw_calls: u64,
    pub game_over: bool,
}

/// Keys the pilot wants held this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PilotKeys {
    left: bool,
    right: bool,
    fire: bool,
}

/// Chase the lowest enemy horizontally, tap fire, hold space to restart
fn pilot(state: &GameState, frame: u64) -> PilotKeys {
    if state.is_game_over() {
        return PilotKeys {
            fire: true,
            ..Default::default()
        };
    }

    let target = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.center().x);
    let player_x = state.player.center().x;

    let (left, right) = match target {
        Some(x) if x < player_x - STEER_DEADZONE => (true, false),
        Some(x) if x > player_x + STEER_DEADZONE => (false, true),
        _ => (false, false),
    };

    PilotKeys {
        left,
        right,
        fire: frame % FIRE_PERIOD == 0,
    }
}

fn press(game: &mut Game<()>, key: &str, held: bool) {
    if held {
        game.key_down(key);
    } else {
        game.key_up(key);
    }
}

/// Run `frames` frames from `seed` and report what happened
pub fn run_headless(seed: u64, tuning: Tuning, frames: u64) -> RunSummary {
    let mut game = Game::new(seed, tuning, ());
    let mut painter = RecordingPainter::new();
    let mut draw_calls = 0u64;

    for frame in 0..frames {
        let keys = pilot(&game.state, frame);
        press(&mut game, "ArrowLeft", keys.left);
        press(&mut game, "ArrowRight", keys.right);
        press(&mut game, " ", keys.fire);

        game.frame(&mut painter);
        draw_calls += painter.calls.len() as u64;
        painter.calls.clear();
    }

    log::info!(
        "Headless run done: {} frames, score {}, {} kills, {} game overs",
        frames,
        game.state.score,
        game.stats.kills,
        game.stats.game_overs
    );

    RunSummary {
        seed,
        frames,
        final_score: game.state.score,
        best_score: game.stats.best_score,
        kills: game.stats.kills,
        game_overs: game.stats.game_overs,
        restarts: game.stats.restarts,
        draw_calls,
        game_over: game.state.is_game_over(),
    }
}
