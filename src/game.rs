//! Session orchestrator
//!
//! Owns the game state and the input map. The host feeds it key/pointer
//! events as they arrive, calls [`Game::frame`] once per display frame and
//! schedules the next one.

use crate::score_label;
use crate::sim::{GameEvent, GameState, InputState, Painter, frame};
use crate::tuning::Tuning;

/// Write-only sink for the "Score: N" line
pub trait ScoreDisplay {
    fn show(&mut self, text: &str);
}

/// Discards score updates
impl ScoreDisplay for () {
    fn show(&mut self, _text: &str) {}
}

/// Running totals across restarts, for logging and headless summaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub kills: u32,
    pub game_overs: u32,
    pub restarts: u32,
    pub best_score: u32,
}

pub struct Game<S: ScoreDisplay> {
    pub state: GameState,
    pub input: InputState,
    pub stats: SessionStats,
    score_display: S,
}

impl<S: ScoreDisplay> Game<S> {
    pub fn new(seed: u64, tuning: Tuning, mut score_display: S) -> Self {
        score_display.show(&score_label(0));
        Self {
            state: GameState::new(seed, tuning),
            input: InputState::new(),
            stats: SessionStats::default(),
            score_display,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    pub fn pointer_down(&mut self) {
        self.input.pointer_down();
    }

    /// Run one frame, then publish what changed
    pub fn frame(&mut self, painter: &mut impl Painter) {
        let input = self.input.take_tick_input();
        frame(&mut self.state, &input, painter);

        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => {
                    self.stats.best_score = self.stats.best_score.max(score);
                    self.score_display.show(&score_label(score));
                }
                GameEvent::EnemyDestroyed => self.stats.kills += 1,
                GameEvent::DifficultyIncreased(interval) => {
                    log::info!("Difficulty up: enemy every {} frames", interval);
                }
                GameEvent::PlayerDestroyed => self.stats.game_overs += 1,
                GameEvent::Restarted => self.stats.restarts += 1,
            }
        }
    }

    pub fn score_display(&self) -> &S {
        &self.score_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, Enemy, RecordingPainter};
    use glam::Vec2;

    #[derive(Default)]
    struct Labels(Vec<String>);

    impl ScoreDisplay for Labels {
        fn show(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    fn new_game() -> Game<Labels> {
        Game::new(7, Tuning::default(), Labels::default())
    }

    #[test]
    fn test_initial_label() {
        let game = new_game();
        assert_eq!(game.score_display().0, vec!["Score: 0"]);
    }

    #[test]
    fn test_kill_updates_display() {
        let mut game = new_game();
        game.state
            .enemies
            .push(Enemy::new(Vec2::new(100.0, 100.0), 40.0, 1.0));
        game.state.bullets.push(Bullet::new(
            Vec2::new(110.0, 130.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(0.0, -7.0),
        ));

        game.frame(&mut RecordingPainter::new());

        assert_eq!(game.score_display().0.last().unwrap(), "Score: 10");
        assert_eq!(game.stats.kills, 1);
        assert_eq!(game.stats.best_score, 10);
    }

    #[test]
    fn test_space_shoots_then_restarts() {
        let mut game = new_game();
        game.key_down(" ");
        game.frame(&mut RecordingPainter::new());
        assert_eq!(game.state.bullets.len(), 1);
        game.key_up(" ");

        game.state
            .enemies
            .push(Enemy::new(Vec2::new(380.0, 500.0), 40.0, 1.0));
        game.frame(&mut RecordingPainter::new());
        assert!(game.state.is_game_over());
        assert_eq!(game.stats.game_overs, 1);

        // Clicking while game over neither shoots nor restarts
        game.pointer_down();
        game.frame(&mut RecordingPainter::new());
        assert!(game.state.is_game_over());

        game.key_down(" ");
        game.frame(&mut RecordingPainter::new());
        assert!(!game.state.is_game_over());
        assert!(game.state.bullets.is_empty());
        assert_eq!(game.stats.restarts, 1);
        assert_eq!(game.score_display().0.last().unwrap(), "Score: 0");
    }

    #[test]
    fn test_wasd_and_arrows_move() {
        let mut game = new_game();
        let start = game.state.player.pos;
        game.key_down("A");
        game.key_down("ArrowUp");
        for _ in 0..4 {
            game.frame(&mut RecordingPainter::new());
        }
        assert_eq!(game.state.player.pos, start + Vec2::new(-20.0, -20.0));

        game.key_up("a");
        game.key_up("ArrowUp");
        game.frame(&mut RecordingPainter::new());
        assert_eq!(game.state.player.pos, start + Vec2::new(-20.0, -20.0));
    }
}
