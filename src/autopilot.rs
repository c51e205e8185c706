//! Idle/demo mode - AI plays the game
//!
//! Produces a [`TickInput`] from the current state each tick, with no
//! randomness of its own, so a seeded run with the autopilot replays exactly.

use crate::consts::*;
use crate::platform::InputSource;
use crate::sim::{GameState, TickInput};

/// How far ahead (px above the ship) an enemy bullet counts as a threat
const THREAT_RANGE: f32 = 160.0;
/// Extra horizontal clearance kept around the ship when dodging
const DODGE_MARGIN: f32 = 12.0;
/// Aim is good enough when the muzzle is this close to the target center
const AIM_TOLERANCE: f32 = 6.0;

/// Deterministic demo player
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Press restart after a game over
    pub auto_restart: bool,
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self { auto_restart }
    }

    /// Decide this tick's input
    pub fn decide(&self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();

        if state.is_game_over() {
            input.restart = self.auto_restart;
            return input;
        }

        let ship = state.player.rect();
        let muzzle_x = state.player.center().x;

        // Find the most dangerous bullet (closest above the ship, in our lane)
        let threat = state
            .enemy_bullets
            .iter()
            .filter(|b| {
                b.pos.y < ship.bottom()
                    && ship.top() - b.pos.y < THREAT_RANGE
                    && b.pos.x > ship.left() - DODGE_MARGIN
                    && b.pos.x < ship.right() + DODGE_MARGIN
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        if let Some(bullet) = threat {
            // Step away from the bullet, toward the roomier side
            let dodge_left = if bullet.pos.x > muzzle_x {
                ship.left() > PLAYER_WIDTH
            } else {
                ship.right() > PLAY_WIDTH - PLAYER_WIDTH
            };
            input.move_left = dodge_left;
            input.move_right = !dodge_left;
            return input;
        }

        // Track the lowest invader; ties go to the one nearest the ship
        let target = state.enemies.iter().max_by(|a, b| {
            a.pos
                .y
                .total_cmp(&b.pos.y)
                .then_with(|| {
                    let da = (a.center().x - muzzle_x).abs();
                    let db = (b.center().x - muzzle_x).abs();
                    db.total_cmp(&da)
                })
        });

        if let Some(enemy) = target {
            // Lead the shot by how far the formation slides during flight
            let flight_ticks =
                (ship.top() - enemy.center().y).max(0.0) / state.player.bullet_speed.abs().max(1.0);
            let lead = state.direction * state.tuning.formation_speed * flight_ticks;
            let offset = enemy.center().x + lead - muzzle_x;
            if offset.abs() <= AIM_TOLERANCE {
                input.fire = true;
            } else if offset < 0.0 {
                input.move_left = true;
            } else {
                input.move_right = true;
            }
        }

        input
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        self.decide(state)
    }
}
