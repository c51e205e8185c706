//! Gameplay constants
//!
//! The fixed arcade numbers, gathered in one struct. A `Tuning` is carried by
//! [`crate::sim::GameState`] and survives restarts. It is not loaded from
//! settings; only code (mostly tests) builds a non-default one.

use serde::{Deserialize, Serialize};

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Player horizontal speed (px/tick)
    pub player_speed: f32,
    /// Ticks between player shots
    pub player_fire_cooldown: u32,
    /// Player bullet vertical speed (negative = upward)
    pub player_bullet_speed: f32,
    /// Enemy bullet vertical speed (positive = downward)
    pub enemy_bullet_speed: f32,
    /// Formation horizontal step (px/tick)
    pub formation_speed: f32,
    /// Formation drop when it touches a wall (px)
    pub formation_drop: f32,
    /// Chance per tick that some enemy fires
    pub enemy_fire_chance: f64,
    /// Score per enemy destroyed
    pub kill_score: u64,
    /// Lives at the start of a game
    pub starting_lives: u8,
    /// Particles spawned when an enemy dies
    pub kill_particles: u32,
    /// Particles spawned when the player is hit
    pub hit_particles: u32,
    /// Downward acceleration applied to particles (px/tick²)
    pub particle_gravity: f32,
    /// Particle lifetime (ticks)
    pub particle_life: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            player_fire_cooldown: 15,
            player_bullet_speed: -8.0,
            enemy_bullet_speed: 4.0,
            formation_speed: 0.5,
            formation_drop: 20.0,
            enemy_fire_chance: 0.02,
            kill_score: 10,
            starting_lives: 3,
            kill_particles: 15,
            hit_particles: 20,
            particle_gravity: 0.2,
            particle_life: 30,
        }
    }
}
