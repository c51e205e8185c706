//! Entity primitives: bullets and particles
//!
//! Plain values that advance themselves by one tick. Collision resolution is
//! owned by the simulation, not by the entities.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::colors::Rgb;
use crate::consts::*;

/// A projectile travelling straight up or down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Collision point (horizontal center, leading edge)
    pub pos: Vec2,
    /// Vertical speed in px/tick; the sign encodes direction
    pub speed: f32,
    pub color: Rgb,
}

impl Bullet {
    pub fn new(pos: Vec2, speed: f32, color: Rgb) -> Self {
        Self { pos, speed, color }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.pos.y += self.speed;
    }

    /// Rendered size of every bullet
    #[inline]
    pub fn size() -> Vec2 {
        Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// A decorative explosion particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in ticks
    pub life: i32,
    /// Lifetime at spawn, used for the fade fraction
    pub max_life: i32,
    pub color: Rgb,
    pub radius: f32,
}

impl Particle {
    /// Spawn a particle at `pos` with a random velocity and radius
    pub fn spawn<R: Rng + ?Sized>(pos: Vec2, color: Rgb, life: u32, rng: &mut R) -> Self {
        let vel = Vec2::new(
            rng.random_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            rng.random_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
        );
        let radius = rng.random_range(PARTICLE_MIN_RADIUS..=PARTICLE_MAX_RADIUS) as f32;
        let life = life.min(i32::MAX as u32) as i32;
        Self {
            pos,
            vel,
            life,
            max_life: life,
            color,
            radius,
        }
    }

    /// Spawn a batch of `count` particles at one impact point
    pub fn burst<R: Rng + ?Sized>(
        out: &mut Vec<Particle>,
        pos: Vec2,
        color: Rgb,
        count: u32,
        life: u32,
        rng: &mut R,
    ) {
        out.reserve(count as usize);
        for _ in 0..count {
            out.push(Self::spawn(pos, color, life, rng));
        }
    }

    /// Advance one tick under gravity
    pub fn tick(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.life -= 1;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Remaining life in [0, 1], for fading
    pub fn life_fraction(&self) -> f32 {
        if self.max_life <= 0 {
            return 0.0;
        }
        (self.life as f32 / self.max_life as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{CYAN, RED};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bullet_tick_direction() {
        let mut up = Bullet::new(Vec2::new(10.0, 100.0), -8.0, CYAN);
        let mut down = Bullet::new(Vec2::new(10.0, 100.0), 4.0, RED);
        up.tick();
        down.tick();
        assert_eq!(up.pos, Vec2::new(10.0, 92.0));
        assert_eq!(down.pos, Vec2::new(10.0, 104.0));
    }

    #[test]
    fn test_particle_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let p = Particle::spawn(Vec2::ZERO, RED, 30, &mut rng);
            assert!(p.vel.x.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.vel.y.abs() <= PARTICLE_MAX_SPEED);
            assert!((2.0..=4.0).contains(&p.radius));
            assert_eq!(p.radius.fract(), 0.0);
            assert_eq!(p.life, 30);
        }
    }

    #[test]
    fn test_particle_tick_applies_gravity_after_move() {
        let mut p = Particle {
            pos: Vec2::new(0.0, 0.0),
            vel: Vec2::new(1.0, -2.0),
            life: 30,
            max_life: 30,
            color: RED,
            radius: 2.0,
        };
        p.tick(0.2);
        assert_eq!(p.pos, Vec2::new(1.0, -2.0));
        assert!((p.vel.y - -1.8).abs() < 1e-6);
        assert_eq!(p.life, 29);
        assert!((p.life_fraction() - 29.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_particle_dies_after_lifetime() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut p = Particle::spawn(Vec2::ZERO, RED, 3, &mut rng);
        for _ in 0..3 {
            assert!(p.is_alive());
            p.tick(0.2);
        }
        assert!(!p.is_alive());
        assert_eq!(p.life_fraction(), 0.0);
    }

    #[test]
    fn test_burst_count() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut out = Vec::new();
        Particle::burst(&mut out, Vec2::new(5.0, 5.0), CYAN, 20, 30, &mut rng);
        assert_eq!(out.len(), 20);
        assert!(out.iter().all(|p| p.pos == Vec2::new(5.0, 5.0)));
    }
}
