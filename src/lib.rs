//! Space Invaders - A neon arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, collisions, waves, game state)
//! - `scene`: Read-only render snapshot consumed by a presentation layer
//! - `platform`: Fixed-step loop driver and input/presenter contracts
//! - `autopilot`: Demo input source that plays the game
//! - `tuning`: Gameplay constants carried by the game state
//! - `settings`: Driver configuration (seed, tick limit, output)

pub mod autopilot;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Player ship geometry
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Distance from the bottom of the play area to the ship's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

    /// Enemy geometry
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 35.0;

    /// Bullet geometry (rendering only, collisions use the bullet's point)
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 15.0;

    /// Wave grid layout
    pub const WAVE_ORIGIN_X: f32 = 100.0;
    pub const WAVE_ORIGIN_Y: f32 = 50.0;
    pub const WAVE_PITCH_X: f32 = 70.0;
    pub const WAVE_PITCH_Y: f32 = 60.0;
    pub const WAVE_COLUMNS: u32 = 8;
    pub const WAVE_BASE_ROWS: u32 = 3;
    pub const WAVE_MAX_ROWS: u32 = 5;

    /// Particle burst shape
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;
    pub const PARTICLE_MIN_RADIUS: u32 = 2;
    pub const PARTICLE_MAX_RADIUS: u32 = 4;
}

/// RGB colors used by the simulation and the scene snapshot
pub mod colors {
    pub type Rgb = [u8; 3];

    pub const GREEN: Rgb = [0, 255, 100];
    pub const RED: Rgb = [255, 50, 50];
    pub const CYAN: Rgb = [0, 255, 255];
    pub const PURPLE: Rgb = [200, 50, 255];
    pub const YELLOW: Rgb = [255, 255, 0];

    /// Enemy palette, indexed by enemy kind
    pub const ENEMY_PALETTE: [Rgb; 3] = [GREEN, PURPLE, YELLOW];
}
