//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! document only needs the keys it wants to override.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Failure to load or accept a tuning document
#[derive(Debug)]
pub enum TuningError {
    /// The document is not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// A value must be strictly positive
    NotPositive { name: &'static str, value: f32 },
    /// A `min`/`max` pair is inverted
    InvertedRange { name: &'static str, min: f32, max: f32 },
    /// A value falls outside the interval it must lie in
    OutOfRange { name: &'static str, value: f32, min: f32, max: f32 },
    /// The spawn interval floor lies above the starting interval
    SpawnFloorAboveStart { floor: u32, start: u32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::NotPositive { name, value } => {
                write!(f, "{} must be positive (got {})", name, value)
            }
            TuningError::InvertedRange { name, min, max } => {
                write!(f, "{} range is inverted ({} > {})", name, min, max)
            }
            TuningError::OutOfRange { name, value, min, max } => {
                write!(f, "{} must be within [{}, {}] (got {})", name, min, max, value)
            }
            TuningError::SpawnFloorAboveStart { floor, start } => write!(
                f,
                "min_spawn_interval {} is above initial_spawn_interval {}",
                floor, start
            ),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub player_spawn_bottom_offset: f32,

    // === Bullets ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,

    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,

    // === Explosions ===
    pub explosion_particles: u32,
    pub particle_life: i32,
    pub particle_min_size: f32,
    pub particle_max_size: f32,
    pub particle_max_speed: f32,
    pub particle_min_hue: f32,
    pub particle_max_hue: f32,

    // === Scoring / difficulty ===
    pub score_per_kill: u32,
    pub difficulty_score_step: u32,
    pub initial_spawn_interval: u32,
    pub spawn_interval_step: u32,
    pub min_spawn_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_spawn_bottom_offset: PLAYER_SPAWN_BOTTOM_OFFSET,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,

            enemy_size: ENEMY_SIZE,
            enemy_min_speed: ENEMY_MIN_SPEED,
            enemy_max_speed: ENEMY_MAX_SPEED,

            explosion_particles: EXPLOSION_PARTICLES,
            particle_life: PARTICLE_LIFE,
            particle_min_size: PARTICLE_MIN_SIZE,
            particle_max_size: PARTICLE_MAX_SIZE,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_min_hue: PARTICLE_MIN_HUE,
            particle_max_hue: PARTICLE_MAX_HUE,

            score_per_kill: SCORE_PER_KILL,
            difficulty_score_step: DIFFICULTY_SCORE_STEP,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("bullet_speed", self.bullet_speed),
            ("enemy_size", self.enemy_size),
            ("enemy_min_speed", self.enemy_min_speed),
            ("particle_min_size", self.particle_min_size),
            ("particle_life", self.particle_life as f32),
            ("difficulty_score_step", self.difficulty_score_step as f32),
            ("spawn_interval_step", self.spawn_interval_step as f32),
            ("initial_spawn_interval", self.initial_spawn_interval as f32),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { name, value });
            }
        }

        let ranges = [
            ("enemy_speed", self.enemy_min_speed, self.enemy_max_speed),
            ("particle_size", self.particle_min_size, self.particle_max_size),
            ("particle_hue", self.particle_min_hue, self.particle_max_hue),
            ("particle_speed", -self.particle_max_speed, self.particle_max_speed),
            ("enemy_x", self.enemy_size, self.width),
            ("player_x", self.player_size, self.width),
            ("player_y", self.player_size, self.height),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(TuningError::InvertedRange { name, min, max });
            }
        }

        // The spawn point must keep the whole tank inside the field
        let offset = self.player_spawn_bottom_offset;
        if !(self.player_size..=self.height).contains(&offset) {
            return Err(TuningError::OutOfRange {
                name: "player_spawn_bottom_offset",
                value: offset,
                min: self.player_size,
                max: self.height,
            });
        }

        if self.min_spawn_interval > self.initial_spawn_interval {
            return Err(TuningError::SpawnFloorAboveStart {
                floor: self.min_spawn_interval,
                start: self.initial_spawn_interval,
            });
        }

        Ok(())
    }

    /// Playfield size as a vector
    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// LocalStorage key for an optional tuning override
    const STORAGE_KEY: &'static str = "tank_shooter_tuning";

    /// Load tuning from LocalStorage (WASM only), falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native builds read tuning files explicitly; see the binary
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No {} store on native, using defaults", Self::STORAGE_KEY);
        Self::default()
    }
}
