//! Renderable scene snapshot
//!
//! [`Scene::capture`] reads a [`GameState`] and produces everything a
//! presentation layer needs to draw one frame. It never mutates the game.
//! Blending, glow and trails are left to the renderer; the helpers at the
//! bottom of this module describe the classic look for renderers that want it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::colors::Rgb;
use crate::consts::{PLAY_HEIGHT, PLAY_WIDTH};
use crate::sim::{Bullet, GamePhase, GameState, Rect};

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub rect: Rect,
    pub color: Rgb,
}

/// An invader, with the phase used for its idle animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyShape {
    pub rect: Rect,
    pub color: Rgb,
    pub anim_phase: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletShape {
    /// Collision point (center of the leading edge)
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleShape {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Remaining life in [0, 1]
    pub life: f32,
}

impl ParticleShape {
    /// Alpha for fading, 255 at spawn down to 0
    pub fn alpha(&self) -> u8 {
        (self.life * 255.0) as u8
    }
}

const GAME_OVER_BANNER: &[&str] = &["GAME OVER", "Press R to Restart"];

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }

    pub fn level_text(&self) -> String {
        format!("Level: {}", self.level)
    }

    /// Banner lines shown over the play area, empty while playing
    pub fn banner(&self) -> &'static [&'static str] {
        match self.phase {
            GamePhase::Running => &[],
            GamePhase::GameOver => GAME_OVER_BANNER,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Simulation time, for animations
    pub time_ticks: u64,
    pub player: RectShape,
    pub enemies: Vec<EnemyShape>,
    /// Player shots followed by enemy shots
    pub bullets: Vec<BulletShape>,
    pub particles: Vec<ParticleShape>,
    pub hud: Hud,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let player = RectShape {
            rect: state.player.rect(),
            color: state.player.color(),
        };

        let enemies = state
            .enemies
            .iter()
            .map(|e| EnemyShape {
                rect: e.rect(),
                color: e.color(),
                anim_phase: e.anim_phase,
            })
            .collect();

        let bullets = state.all_bullets().map(bullet_shape).collect();

        let particles = state
            .particles
            .iter()
            .map(|p| ParticleShape {
                pos: p.pos,
                radius: p.radius,
                color: p.color,
                life: p.life_fraction(),
            })
            .collect();

        Self {
            time_ticks: state.time_ticks,
            player,
            enemies,
            bullets,
            particles,
            hud: Hud {
                score: state.score,
                lives: state.lives,
                level: state.level,
                phase: state.phase,
            },
        }
    }
}

fn bullet_shape(bullet: &Bullet) -> BulletShape {
    BulletShape {
        pos: bullet.pos,
        size: Bullet::size(),
        color: bullet.color,
    }
}

/// Vertical eye bob for an invader, in pixels
pub fn enemy_pulse(anim_phase: f32, elapsed_ms: u64) -> f32 {
    ((elapsed_ms as f32) * 0.005 + anim_phase).sin() * 3.0
}

/// One segment of a bullet's fading trail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
    pub alpha: u8,
}

/// Trail segments drawn for a bullet, brightest first
pub fn bullet_trail(bullet: &BulletShape) -> impl Iterator<Item = TrailSegment> + '_ {
    (0..5u8).map(move |i| TrailSegment {
        pos: Vec2::new(
            bullet.pos.x - (bullet.size.x / 2.0).floor(),
            bullet.pos.y + f32::from(i) * 3.0,
        ),
        size: bullet.size,
        color: bullet.color,
        alpha: 255 - i * 50,
    })
}

/// A background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgb,
}

pub const STAR_COUNT: u64 = 100;

/// Scrolling starfield at `elapsed_ms`
pub fn starfield(elapsed_ms: u64) -> impl Iterator<Item = Star> {
    let width = PLAY_WIDTH as u64;
    let height = PLAY_HEIGHT as u64;
    let scroll = elapsed_ms / 20;
    (0..STAR_COUNT).map(move |i| {
        let brightness = (150 + i % 100).min(255) as u8;
        Star {
            pos: Vec2::new(
                ((i * 123) % width) as f32,
                ((i * 456 + scroll) % height) as f32,
            ),
            size: (i % 3 + 1) as f32,
            color: [brightness, brightness, brightness],
        }
    })
}

/// Milliseconds of simulated time after `ticks` ticks
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / u64::from(crate::consts::TICK_RATE)
}
