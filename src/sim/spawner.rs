//! Enemy admission pacing
//!
//! A frame counter admits one enemy each time it passes the current interval.
//! The interval shrinks as the score crosses each difficulty step.

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    /// Frames since the last admission
    pub timer: u32,
    /// Frames between admissions
    pub interval: u32,
    step: u32,
    floor: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: 0,
            interval: tuning.initial_spawn_interval,
            step: tuning.spawn_interval_step,
            floor: tuning.min_spawn_interval,
        }
    }

    /// Count one frame. Returns true when an enemy should be admitted; at
    /// most one per call however far the counter overshot.
    pub fn advance(&mut self) -> bool {
        self.timer += 1;
        if self.timer > self.interval {
            self.timer = 0;
            true
        } else {
            false
        }
    }

    /// Tighten the interval if `score` sits on a positive multiple of
    /// `score_step`. Returns true if the interval changed.
    pub fn on_score(&mut self, score: u32, score_step: u32) -> bool {
        if score == 0 || score_step == 0 || score % score_step != 0 || self.interval <= self.floor {
            return false;
        }
        self.interval = self.interval.saturating_sub(self.step).max(self.floor);
        true
    }
}
