//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. Randomness is
//! never stored here; callers pass an RNG into every operation that needs one.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::{Enemy, EnemyKind, Player};
use super::entity::{Bullet, Particle};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatCause {
    /// Lives ran out
    OutOfLives,
    /// The formation reached the player's line
    Invaded,
}

/// Notable things that happened during a tick, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerFired,
    EnemyFired { from: Vec2 },
    EnemyDestroyed { kind: EnemyKind, at: Vec2 },
    PlayerHit { lives_left: u8 },
    /// The formation was wiped out; `level` is the new level
    WaveCleared { level: u32 },
    GameOver { cause: DefeatCause },
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values, kept across restarts
    pub tuning: Tuning,
    pub player: Player,
    /// Formation, in spawn order
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<Bullet>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub score: u64,
    pub lives: u8,
    /// Current level (1-based)
    pub level: u32,
    /// Formation direction, +1 right or -1 left
    pub direction: f32,
    pub phase: GamePhase,
    /// Ticks simulated while running
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh game with default tuning and wave 1 spawned
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_tuning(Tuning::default(), rng)
    }

    pub fn with_tuning<R: Rng + ?Sized>(tuning: Tuning, rng: &mut R) -> Self {
        let mut state = Self {
            player: Player::new(&tuning),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            particles: Vec::new(),
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
            direction: 1.0,
            phase: GamePhase::Running,
            time_ticks: 0,
            tuning,
        };
        state.spawn_wave(rng);
        state
    }

    /// Replace the formation with a new grid for the current level
    pub fn spawn_wave<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (rows, cols) = wave_dimensions(self.level);
        self.enemies.clear();
        self.enemies.reserve((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(
                    WAVE_ORIGIN_X + col as f32 * WAVE_PITCH_X,
                    WAVE_ORIGIN_Y + row as f32 * WAVE_PITCH_Y,
                );
                let phase = rng.random_range(0.0..std::f32::consts::TAU);
                let enemy = Enemy::new(pos, EnemyKind::for_row(row), phase);
                self.enemies.push(enemy);
            }
        }
        log::info!("Level {}: spawned {}x{} wave", self.level, rows, cols);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Every bullet in flight, player shots first
    pub fn all_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.player.bullets.iter().chain(self.enemy_bullets.iter())
    }
}

/// Formation size (rows, columns) for a level
pub fn wave_dimensions(level: u32) -> (u32, u32) {
    let rows = (WAVE_BASE_ROWS + level / 2).min(WAVE_MAX_ROWS);
    (rows, WAVE_COLUMNS)
}
