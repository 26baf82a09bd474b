//! Game state and session lifecycle
//!
//! Everything that changes during a session is owned by [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entities::{Bullet, Enemy, Particle, Player};
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Player was hit; waiting for restart
    GameOver,
}

/// Things that happened during a frame, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score changed (kill or restart)
    ScoreChanged(u32),
    EnemyDestroyed,
    /// Spawn interval tightened to the given frame count
    DifficultyIncreased(u32),
    /// Player collided with an enemy
    PlayerDestroyed,
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub spawner: Spawner,
    /// Frames run since the state was created
    pub frame: u64,
    /// Pending events for the host
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed and balance
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            player: Player::spawn(&tuning),
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            spawner: Spawner::new(&tuning),
            frame: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Playfield size
    pub fn playfield(&self) -> Vec2 {
        self.tuning.playfield()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Fresh player, empty collections, score and difficulty reset. The RNG
    /// stream and frame counter carry on.
    pub fn restart(&mut self) {
        self.player = Player::spawn(&self.tuning);
        self.bullets.clear();
        self.enemies.clear();
        self.particles.clear();
        self.score = 0;
        self.spawner = Spawner::new(&self.tuning);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
        self.events.push(GameEvent::ScoreChanged(0));
    }

    /// Take the events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::Enemy;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawner.interval, 60);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.playfield(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::new(1, Tuning::default());
        state.score = 340;
        state.spawner.interval = 45;
        state.spawner.timer = 12;
        state.phase = GamePhase::GameOver;
        state.player.pos = Vec2::new(5.0, 5.0);
        state.enemies.push(Enemy::new(Vec2::ZERO, 40.0, 2.0));

        state.restart();

        assert_eq!(state.score, 0);
        assert_eq!(state.spawner.interval, 60);
        assert_eq!(state.spawner.timer, 0);
        assert!(!state.is_game_over());
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.pos, Vec2::new(380.0, 540.0));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Restarted, GameEvent::ScoreChanged(0)]
        );
        assert!(state.events.is_empty());
    }
}
