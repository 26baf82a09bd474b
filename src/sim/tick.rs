//! Per-frame game loop
//!
//! One call to [`frame`] is one display frame. Within a running frame the
//! order is fixed: queued shots, player, bullets, spawner, enemies (with
//! collisions), particles. Removed entities are filtered after their own
//! pass, never mid-pass.

use super::collision::overlaps;
use super::entities::{Enemy, explode};
use super::input::TickInput;
use super::paint::{Painter, TextAlign, palette};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one frame and draw it
pub fn frame(state: &mut GameState, input: &TickInput, painter: &mut impl Painter) {
    state.frame += 1;

    match state.phase {
        GamePhase::Running => run(state, input, painter),
        GamePhase::GameOver => {
            // The last running frame stays on screen under the overlay
            draw_game_over(state, painter);
            if input.fire_held {
                state.restart();
                log::info!("Game restarted");
                // Presses queued while game over were restart requests, not shots
                let input = TickInput {
                    shots: 0,
                    ..input.clone()
                };
                run(state, &input, painter);
            }
        }
    }
}

fn run(state: &mut GameState, input: &TickInput, painter: &mut impl Painter) {
    let playfield = state.playfield();

    // Shots were requested between frames, before this frame's movement
    for _ in 0..input.shots {
        state.player.shoot(&mut state.bullets, &state.tuning);
    }

    painter.clear();

    state.player.update(input, playfield);
    state.player.draw(painter);

    for bullet in &mut state.bullets {
        bullet.update(playfield);
        if !bullet.is_removed() {
            bullet.draw(painter);
        }
    }
    state.bullets.retain(|b| !b.is_removed());

    if state.spawner.advance() {
        let enemy = Enemy::spawn(&mut state.rng, &state.tuning);
        state.enemies.push(enemy);
    }

    update_enemies(state, painter);
    state.enemies.retain(|e| !e.is_removed());
    state.bullets.retain(|b| !b.is_removed());

    for particle in &mut state.particles {
        particle.update();
        if particle.is_alive() {
            particle.draw(painter);
        }
    }
    state.particles.retain(|p| p.is_alive());
}

/// Move and draw enemies, resolving bullet and player collisions as we go
fn update_enemies(state: &mut GameState, painter: &mut impl Painter) {
    let playfield = state.playfield();
    let GameState {
        tuning,
        rng,
        phase,
        score,
        player,
        bullets,
        enemies,
        particles,
        spawner,
        events,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        enemy.update(playfield);
        if !enemy.is_removed() {
            enemy.draw(painter);
        }

        for bullet in bullets.iter_mut() {
            // Each side marks itself on first contact so neither is spent twice
            if bullet.marked_for_deletion || enemy.marked_for_deletion {
                continue;
            }
            if !overlaps(&*bullet, &*enemy) {
                continue;
            }
            bullet.marked_for_deletion = true;
            enemy.marked_for_deletion = true;
            *score += tuning.score_per_kill;
            events.push(GameEvent::EnemyDestroyed);
            events.push(GameEvent::ScoreChanged(*score));
            explode(particles, enemy.center(), rng, tuning);

            if spawner.on_score(*score, tuning.difficulty_score_step) {
                log::debug!("Spawn interval now {} frames", spawner.interval);
                events.push(GameEvent::DifficultyIncreased(spawner.interval));
            }
        }

        if overlaps(&*player, &*enemy) {
            if *phase == GamePhase::Running {
                log::info!("Game over, final score {}", score);
                events.push(GameEvent::PlayerDestroyed);
            }
            *phase = GamePhase::GameOver;
            explode(particles, player.center(), rng, tuning);
        }
    }
}

fn draw_game_over(state: &GameState, painter: &mut impl Painter) {
    let center = state.playfield() / 2.0;
    painter.fill_text("GAME OVER", center, 40.0, TextAlign::Center, palette::TEXT);
    painter.fill_text(
        "Press Space to Restart",
        center + glam::Vec2::new(0.0, 40.0),
        20.0,
        TextAlign::Center,
        palette::TEXT,
    );
}
