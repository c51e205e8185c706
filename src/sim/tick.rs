//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The step order
//! below is part of the game's behavior; reordering it changes outcomes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{enemy_shots_vs_player, player_shots_vs_enemies, remove_indices};
use super::entity::{Bullet, Particle};
use super::state::{DefeatCause, GameEvent, GamePhase, GameState};
use crate::colors::RED;
use crate::consts::PLAY_HEIGHT;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// Start a new game (only honoured after game over)
    pub restart: bool,
}

/// Advance the game state by one tick, returning what happened
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            let tuning = state.tuning.clone();
            *state = GameState::with_tuning(tuning, rng);
            log::info!("Game restarted");
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    state.time_ticks += 1;

    // Input: left and right both apply, so holding both cancels out
    if input.move_left {
        state.player.move_by(-1.0);
    }
    if input.move_right {
        state.player.move_by(1.0);
    }
    if input.fire && state.player.shoot() {
        events.push(GameEvent::PlayerFired);
    }

    state.player.tick();

    move_formation(state);
    enemy_fire(state, rng, &mut events);

    for bullet in &mut state.enemy_bullets {
        bullet.tick();
    }
    state.enemy_bullets.retain(|b| b.pos.y < PLAY_HEIGHT);

    resolve_player_shots(state, rng, &mut events);
    resolve_enemy_shots(state, rng, &mut events);
    if state.phase == GamePhase::GameOver {
        return events;
    }

    let gravity = state.tuning.particle_gravity;
    for particle in &mut state.particles {
        particle.tick(gravity);
    }
    state.particles.retain(Particle::is_alive);

    let player_top = state.player.rect().top();
    if state.enemies.iter().any(|e| e.rect().bottom() >= player_top) {
        game_over(state, DefeatCause::Invaded, &mut events);
        return events;
    }

    if state.enemies.is_empty() {
        state.level += 1;
        log::info!("Wave cleared, advancing to level {}", state.level);
        state.spawn_wave(rng);
        events.push(GameEvent::WaveCleared { level: state.level });
    }

    events
}

/// Slide the formation sideways; on touching a wall, reverse and drop.
///
/// The sideways step of this tick is kept even when the formation turns.
fn move_formation(state: &mut GameState) {
    let dx = state.direction * state.tuning.formation_speed;
    let mut descend = false;
    for enemy in &mut state.enemies {
        enemy.move_by(dx, 0.0);
        if enemy.touches_side_wall() {
            descend = true;
        }
    }

    if descend {
        state.direction = -state.direction;
        let drop = state.tuning.formation_drop;
        for enemy in &mut state.enemies {
            enemy.move_by(0.0, drop);
        }
    }
}

fn enemy_fire<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let roll: f64 = rng.random();
    if roll >= state.tuning.enemy_fire_chance || state.enemies.is_empty() {
        return;
    }
    let shooter = &state.enemies[rng.random_range(0..state.enemies.len())];
    let from = shooter.muzzle();
    let bullet = Bullet::new(from, state.tuning.enemy_bullet_speed, RED);
    state.enemy_bullets.push(bullet);
    log::trace!("Enemy fired from ({:.1}, {:.1})", from.x, from.y);
    events.push(GameEvent::EnemyFired { from });
}

fn resolve_player_shots<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let hits = player_shots_vs_enemies(&state.player.bullets, &state.enemies);
    if hits.is_empty() {
        return;
    }

    for hit in &hits {
        let enemy = &state.enemies[hit.enemy];
        let at = enemy.center();
        let kind = enemy.kind;
        state.score = state.score.saturating_add(state.tuning.kill_score);
        Particle::burst(
            &mut state.particles,
            at,
            kind.color(),
            state.tuning.kill_particles,
            state.tuning.particle_life,
            rng,
        );
        log::debug!(
            "Enemy destroyed at ({:.1}, {:.1}), score {}",
            at.x,
            at.y,
            state.score
        );
        events.push(GameEvent::EnemyDestroyed { kind, at });
    }

    let bullets: Vec<usize> = hits.iter().map(|h| h.bullet).collect();
    let enemies: Vec<usize> = hits.iter().map(|h| h.enemy).collect();
    remove_indices(&mut state.player.bullets, &bullets);
    remove_indices(&mut state.enemies, &enemies);
}

fn resolve_enemy_shots<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let hits = enemy_shots_vs_player(&state.enemy_bullets, &state.player.rect());
    if hits.is_empty() {
        return;
    }

    let at = state.player.center();
    let color = state.player.color();
    let mut consumed = Vec::with_capacity(hits.len());
    for index in hits {
        consumed.push(index);
        state.lives = state.lives.saturating_sub(1);
        Particle::burst(
            &mut state.particles,
            at,
            color,
            state.tuning.hit_particles,
            state.tuning.particle_life,
            rng,
        );
        log::debug!("Player hit, {} lives left", state.lives);
        events.push(GameEvent::PlayerHit {
            lives_left: state.lives,
        });
        if state.lives == 0 {
            game_over(state, DefeatCause::OutOfLives, events);
            break;
        }
    }
    remove_indices(&mut state.enemy_bullets, &consumed);
}

fn game_over(state: &mut GameState, cause: DefeatCause, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over ({:?}) at level {} with score {}",
        cause,
        state.level,
        state.score
    );
    events.push(GameEvent::GameOver { cause });
}
