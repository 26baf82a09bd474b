//! Player, bullets, enemies and explosion particles
//!
//! Entities are plain values. None of them refers to another; collisions,
//! spawning and explosions are driven by the frame loop.

use glam::Vec2;
use rand::Rng;

use super::collision::{Bounds, Rect};
use super::input::TickInput;
use super::paint::{Painter, hsl_to_rgba, palette};
use crate::box_center;
use crate::tuning::Tuning;

/// Direction of the last applied move (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Angle in radians, screen coordinates (y down)
    pub fn angle(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Facing::Up => -FRAC_PI_2,
            Facing::Down => FRAC_PI_2,
            Facing::Left => PI,
            Facing::Right => 0.0,
        }
    }

    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::NEG_Y,
            Facing::Down => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// The player's tank
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub facing: Facing,
}

impl Player {
    pub fn new(pos: Vec2, size: f32, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(size),
            speed,
            facing: Facing::default(),
        }
    }

    /// Spawn centred horizontally, near the bottom edge
    pub fn spawn(tuning: &Tuning) -> Self {
        let pos = Vec2::new(
            tuning.width / 2.0 - tuning.player_size / 2.0,
            tuning.height - tuning.player_spawn_bottom_offset,
        );
        Self::new(pos, tuning.player_size, tuning.player_speed)
    }

    /// Apply held directions. Each axis moves independently (diagonals are
    /// not normalized) and is clamped so the tank stays inside `playfield`.
    pub fn update(&mut self, input: &TickInput, playfield: Vec2) {
        let max = (playfield - self.size).max(Vec2::ZERO);
        let moves = [
            (input.up, Facing::Up),
            (input.down, Facing::Down),
            (input.left, Facing::Left),
            (input.right, Facing::Right),
        ];
        for (held, facing) in moves {
            if !held {
                continue;
            }
            let target = (self.pos + facing.unit() * self.speed).clamp(Vec2::ZERO, max);
            if target != self.pos {
                self.pos = target;
                self.facing = facing;
            }
        }
    }

    /// Fire one bullet straight up from the top centre of the tank
    pub fn shoot(&self, bullets: &mut Vec<Bullet>, tuning: &Tuning) {
        let pos = Vec2::new(
            self.pos.x + self.size.x / 2.0 - tuning.bullet_width / 2.0,
            self.pos.y,
        );
        bullets.push(Bullet::new(
            pos,
            Vec2::new(tuning.bullet_width, tuning.bullet_height),
            Vec2::new(0.0, -tuning.bullet_speed),
        ));
    }

    pub fn center(&self) -> Vec2 {
        box_center(self.pos, self.size)
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        painter.fill_rect(self.pos, self.size, palette::PLAYER);

        // Turret block and a barrel pointing the way we last moved
        let center = self.center();
        let turret = self.size * 0.4;
        painter.fill_rect(center - turret / 2.0, turret, palette::TURRET);

        let dir = self.facing.unit();
        let reach = self.size.x / 2.0;
        let thickness = self.size.x * 0.15;
        let barrel = if dir.x != 0.0 {
            Vec2::new(reach, thickness)
        } else {
            Vec2::new(thickness, reach)
        };
        let tip = center + dir * reach;
        let corner = center.min(tip) - Vec2::new(dir.y.abs(), dir.x.abs()) * thickness / 2.0;
        painter.fill_rect(corner, barrel, palette::TURRET);
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A projectile moving at constant velocity
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub marked_for_deletion: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            size,
            vel,
            marked_for_deletion: false,
        }
    }

    /// Advance; leaving the playfield on any axis marks the bullet
    pub fn update(&mut self, playfield: Vec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0
            || self.pos.x > playfield.x
            || self.pos.y < 0.0
            || self.pos.y > playfield.y
        {
            self.marked_for_deletion = true;
        }
    }

    pub fn is_removed(&self) -> bool {
        self.marked_for_deletion
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        painter.fill_rect(self.pos, self.size, palette::BULLET);
    }
}

impl Bounds for Bullet {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A descending enemy tank
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed per frame
    pub speed: f32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, size: f32, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(size),
            speed,
            marked_for_deletion: false,
        }
    }

    /// Spawn at a random column just above the visible area
    pub fn spawn(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let x = rng.random::<f32>() * (tuning.width - tuning.enemy_size);
        let speed = tuning.enemy_min_speed
            + rng.random::<f32>() * (tuning.enemy_max_speed - tuning.enemy_min_speed);
        Self::new(Vec2::new(x, -tuning.enemy_size), tuning.enemy_size, speed)
    }

    /// Descend; passing the bottom edge marks the enemy as missed
    pub fn update(&mut self, playfield: Vec2) {
        self.pos.y += self.speed;
        if self.pos.y > playfield.y {
            self.marked_for_deletion = true;
        }
    }

    pub fn is_removed(&self) -> bool {
        self.marked_for_deletion
    }

    pub fn center(&self) -> Vec2 {
        box_center(self.pos, self.size)
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        painter.fill_rect(self.pos, self.size, palette::ENEMY);
        let hatch = self.size / 2.0;
        painter.fill_rect(self.pos + self.size / 4.0, hatch, palette::ENEMY_HATCH);
    }
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Short-lived explosion debris; never collides with anything
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Hue in degrees
    pub hue: f32,
    /// Frames remaining
    pub life: i32,
}

impl Particle {
    pub fn new(pos: Vec2, rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let spread = tuning.particle_max_speed;
        let size = tuning.particle_min_size
            + rng.random::<f32>() * (tuning.particle_max_size - tuning.particle_min_size);
        let vel = Vec2::new(
            rng.random::<f32>() * 2.0 * spread - spread,
            rng.random::<f32>() * 2.0 * spread - spread,
        );
        let hue = tuning.particle_min_hue
            + rng.random::<f32>() * (tuning.particle_max_hue - tuning.particle_min_hue);
        Self {
            pos,
            vel,
            size,
            hue,
            life: tuning.particle_life,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        painter.fill_circle(self.pos, self.size, hsl_to_rgba(self.hue, 1.0, 0.5));
    }
}

/// Append a burst of particles centred on `pos`
pub fn explode(particles: &mut Vec<Particle>, pos: Vec2, rng: &mut impl Rng, tuning: &Tuning) {
    particles.extend((0..tuning.explosion_particles).map(|_| Particle::new(pos, rng, tuning)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FIELD: Vec2 = Vec2::new(800.0, 600.0);

    fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }

    #[test]
    fn test_player_spawn_position() {
        let p = Player::spawn(&Tuning::default());
        assert_eq!(p.pos, Vec2::new(380.0, 540.0));
        assert_eq!(p.size, Vec2::splat(40.0));
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_hold_up_ten_frames() {
        let mut p = Player::spawn(&Tuning::default());
        let start = p.pos.y;
        let input = held(true, false, false, false);
        for _ in 0..10 {
            p.update(&input, FIELD);
        }
        assert_eq!(p.pos.y, start - 50.0);
        assert_eq!(p.facing, Facing::Up);
    }

    #[test]
    fn test_player_clamps_at_edges() {
        let mut p = Player::new(Vec2::new(2.0, 3.0), 40.0, 5.0);
        p.update(&held(true, false, true, false), FIELD);
        assert_eq!(p.pos, Vec2::ZERO);

        let mut p = Player::new(Vec2::new(758.0, 559.0), 40.0, 5.0);
        p.update(&held(false, true, false, true), FIELD);
        assert_eq!(p.pos, Vec2::new(760.0, 560.0));
    }

    #[test]
    fn test_blocked_move_keeps_facing() {
        let mut p = Player::new(Vec2::new(100.0, 0.0), 40.0, 5.0);
        p.update(&held(false, false, true, false), FIELD);
        assert_eq!(p.facing, Facing::Left);
        // Already at the top: up cannot apply, facing stays Left
        p.update(&held(true, false, false, false), FIELD);
        assert_eq!(p.facing, Facing::Left);
        assert_eq!(p.pos, Vec2::new(95.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut p = Player::new(Vec2::new(100.0, 100.0), 40.0, 5.0);
        p.update(&held(true, false, false, true), FIELD);
        assert_eq!(p.pos, Vec2::new(105.0, 95.0));
        // Right is applied last
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut p = Player::new(Vec2::new(100.0, 100.0), 40.0, 5.0);
        p.update(&held(false, false, true, true), FIELD);
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_shoot_from_top_centre() {
        let tuning = Tuning::default();
        let p = Player::new(Vec2::new(100.0, 200.0), 40.0, 5.0);
        let mut bullets = Vec::new();
        p.shoot(&mut bullets, &tuning);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].pos, Vec2::new(117.5, 200.0));
        assert_eq!(bullets[0].vel, Vec2::new(0.0, -7.0));
        assert_eq!(bullets[0].size, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn test_bullet_marked_when_leaving_top() {
        let mut b = Bullet::new(Vec2::new(50.0, 5.0), Vec2::new(5.0, 10.0), Vec2::new(0.0, -7.0));
        b.update(FIELD);
        assert_eq!(b.pos.y, -2.0);
        assert!(b.is_removed());
    }

    #[test]
    fn test_bullet_marked_when_leaving_sides() {
        let mut left = Bullet::new(Vec2::new(2.0, 300.0), Vec2::new(5.0, 10.0), Vec2::new(-3.0, 0.0));
        left.update(FIELD);
        assert!(left.is_removed());

        let mut right = Bullet::new(Vec2::new(798.0, 300.0), Vec2::new(5.0, 10.0), Vec2::new(3.0, 0.0));
        right.update(FIELD);
        assert!(right.is_removed());

        // Landing exactly on the edge is still inside
        let mut edge = Bullet::new(Vec2::new(797.0, 300.0), Vec2::new(5.0, 10.0), Vec2::new(3.0, 0.0));
        edge.update(FIELD);
        assert!(!edge.is_removed());
    }

    #[test]
    fn test_bullet_survives_inside() {
        let mut b = Bullet::new(Vec2::new(50.0, 300.0), Vec2::new(5.0, 10.0), Vec2::new(0.0, -7.0));
        b.update(FIELD);
        assert!(!b.is_removed());
    }

    #[test]
    fn test_enemy_spawn_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let e = Enemy::spawn(&mut rng, &tuning);
            assert!(e.pos.x >= 0.0 && e.pos.x <= 760.0);
            assert_eq!(e.pos.y, -40.0);
            assert!(e.speed >= 1.0 && e.speed < 3.0);
        }
    }

    #[test]
    fn test_enemy_missed_past_bottom() {
        let mut e = Enemy::new(Vec2::new(10.0, 599.0), 40.0, 2.0);
        e.update(FIELD);
        assert!(e.is_removed());

        let mut e = Enemy::new(Vec2::new(10.0, 598.0), 40.0, 2.0);
        e.update(FIELD);
        // Exactly at the edge is still in play
        assert!(!e.is_removed());
    }

    #[test]
    fn test_particle_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let p = Particle::new(Vec2::ZERO, &mut rng, &tuning);
            assert!(p.size >= 2.0 && p.size < 7.0);
            assert!(p.vel.x >= -2.0 && p.vel.x < 2.0);
            assert!(p.vel.y >= -2.0 && p.vel.y < 2.0);
            assert!(p.hue >= 10.0 && p.hue < 70.0);
            assert_eq!(p.life, 20);
        }
    }

    #[test]
    fn test_particle_dies_after_twenty_updates() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = Particle::new(Vec2::ZERO, &mut rng, &tuning);
        for _ in 0..19 {
            p.update();
            assert!(p.is_alive());
        }
        p.update();
        assert!(!p.is_alive());
        assert_eq!(p.life, 0);
    }

    #[test]
    fn test_explode_adds_batch() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        explode(&mut particles, Vec2::new(20.0, 20.0), &mut rng, &tuning);
        assert_eq!(particles.len(), 10);
        assert!(particles.iter().all(|p| p.pos == Vec2::new(20.0, 20.0)));
    }

    proptest! {
        #[test]
        fn player_stays_in_bounds(
            start_x in 0.0f32..760.0,
            start_y in 0.0f32..560.0,
            moves in proptest::collection::vec(any::<(bool, bool, bool, bool)>(), 0..200),
        ) {
            let mut p = Player::new(Vec2::new(start_x, start_y), 40.0, 5.0);
            for (up, down, left, right) in moves {
                p.update(&held(up, down, left, right), FIELD);
                prop_assert!(p.bounds().within(FIELD.x, FIELD.y));
            }
        }

        #[test]
        fn particle_lives_exactly_its_life(seed in any::<u64>(), life in 1i32..100) {
            let tuning = Tuning { particle_life: life, ..Tuning::default() };
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut particle = Particle::new(Vec2::ZERO, &mut rng, &tuning);
            for _ in 1..life {
                particle.update();
                prop_assert!(particle.is_alive());
            }
            particle.update();
            prop_assert!(!particle.is_alive());
        }
    }
}
