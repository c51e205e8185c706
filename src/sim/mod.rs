//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use actor::{Enemy, EnemyKind, Player};
pub use collision::{Hit, Rect, enemy_shots_vs_player, player_shots_vs_enemies};
pub use entity::{Bullet, Particle};
pub use state::{DefeatCause, GameEvent, GamePhase, GameState, wave_dimensions};
pub use tick::{TickInput, tick};
