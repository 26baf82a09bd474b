//! Tank Shooter - A single-screen arcade tank shooter
//!
//! Core modules:
//! - `sim`: Per-frame simulation (entities, spawning, collisions, game state)
//! - `game`: Orchestrator wiring input events, frames and the score display
//! - `renderer`: WebGPU rendering of the painter primitives
//! - `tuning`: Data-driven game balance
//! - `headless`: Scripted sessions without a display

pub mod game;
pub mod headless;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, ScoreDisplay};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player tank
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance of the spawn point above the bottom edge
    pub const PLAYER_SPAWN_BOTTOM_OFFSET: f32 = 60.0;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const BULLET_SPEED: f32 = 7.0;

    /// Enemy tanks
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_MAX_SPEED: f32 = 3.0;

    /// Explosion particles
    pub const EXPLOSION_PARTICLES: u32 = 10;
    pub const PARTICLE_LIFE: i32 = 20;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_MAX_SIZE: f32 = 7.0;
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    /// Fire hues in degrees
    pub const PARTICLE_MIN_HUE: f32 = 10.0;
    pub const PARTICLE_MAX_HUE: f32 = 70.0;

    /// Scoring and difficulty
    pub const SCORE_PER_KILL: u32 = 10;
    pub const DIFFICULTY_SCORE_STEP: u32 = 100;
    pub const INITIAL_SPAWN_INTERVAL: u32 = 60;
    pub const SPAWN_INTERVAL_STEP: u32 = 5;
    pub const MIN_SPAWN_INTERVAL: u32 = 20;
}

/// Centre of an axis-aligned box given its top-left corner and size
#[inline]
pub fn box_center(pos: Vec2, size: Vec2) -> Vec2 {
    pos + size / 2.0
}

/// Text shown by the score display
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}
