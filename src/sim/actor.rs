//! Actors: the player ship and the invaders

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::Bullet;
use crate::colors::{CYAN, ENEMY_PALETTE, Rgb};
use crate::consts::*;
use crate::tuning::Tuning;

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal speed (px/tick)
    pub speed: f32,
    /// Ticks remaining before the next shot is allowed
    pub shoot_cooldown: u32,
    /// Cooldown applied after each shot
    pub fire_cooldown: u32,
    /// Vertical speed of fired bullets
    pub bullet_speed: f32,
    /// Active shots, oldest first
    pub bullets: Vec<Bullet>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                (PLAY_WIDTH / 2.0).floor() - (PLAYER_WIDTH / 2.0).floor(),
                PLAY_HEIGHT - PLAYER_BOTTOM_OFFSET,
            ),
            speed: tuning.player_speed,
            shoot_cooldown: 0,
            fire_cooldown: tuning.player_fire_cooldown,
            bullet_speed: tuning.player_bullet_speed,
            bullets: Vec::new(),
        }
    }

    /// Move by `direction * speed` and clamp to the play area
    pub fn move_by(&mut self, direction: f32) {
        self.pos.x += direction * self.speed;
        self.pos.x = self.pos.x.clamp(0.0, PLAY_WIDTH - PLAYER_WIDTH);
    }

    /// Fire from the nose if the cooldown has elapsed. Returns whether a shot
    /// was fired.
    pub fn shoot(&mut self) -> bool {
        if self.shoot_cooldown != 0 {
            return false;
        }
        let muzzle = Vec2::new(self.pos.x + (PLAYER_WIDTH / 2.0).floor(), self.pos.y);
        self.bullets.push(Bullet::new(muzzle, self.bullet_speed, CYAN));
        self.shoot_cooldown = self.fire_cooldown;
        true
    }

    /// Cool down the gun and advance shots, dropping those past the top
    pub fn tick(&mut self) {
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
        for bullet in &mut self.bullets {
            bullet.tick();
        }
        self.bullets.retain(|b| b.pos.y > 0.0);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + (PLAYER_WIDTH / 2.0).floor(),
            self.pos.y + (PLAYER_HEIGHT / 2.0).floor(),
        )
    }

    pub fn color(&self) -> Rgb {
        CYAN
    }
}

/// Enemy kinds; purely cosmetic, selects the palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Green,
    Purple,
    Yellow,
}

impl EnemyKind {
    /// Kind for a formation row (cycles through the palette)
    pub fn for_row(row: u32) -> Self {
        match row % 3 {
            0 => EnemyKind::Green,
            1 => EnemyKind::Purple,
            _ => EnemyKind::Yellow,
        }
    }

    pub fn index(self) -> usize {
        match self {
            EnemyKind::Green => 0,
            EnemyKind::Purple => 1,
            EnemyKind::Yellow => 2,
        }
    }

    pub fn color(self) -> Rgb {
        ENEMY_PALETTE[self.index()]
    }
}

/// An invader in the formation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub kind: EnemyKind,
    /// Animation phase offset (radians), rendering only
    pub anim_phase: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, kind: EnemyKind, anim_phase: f32) -> Self {
        Self {
            pos,
            kind,
            anim_phase,
        }
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + (ENEMY_WIDTH / 2.0).floor(),
            self.pos.y + (ENEMY_HEIGHT / 2.0).floor(),
        )
    }

    /// Where this enemy's shots leave from (bottom center)
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + (ENEMY_WIDTH / 2.0).floor(), self.pos.y + ENEMY_HEIGHT)
    }

    /// True when the formation must turn around
    pub fn touches_side_wall(&self) -> bool {
        self.pos.x <= 0.0 || self.pos.x >= PLAY_WIDTH - ENEMY_WIDTH
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_position() {
        let player = Player::default();
        assert_eq!(player.pos, Vec2::new(375.0, 520.0));
        assert_eq!(player.center(), Vec2::new(400.0, 540.0));
    }

    #[test]
    fn test_player_clamps_left() {
        let mut player = Player::default();
        for _ in 0..400 {
            player.move_by(-1.0);
            assert!(player.pos.x >= 0.0);
        }
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_player_clamps_right() {
        let mut player = Player::default();
        for _ in 0..400 {
            player.move_by(1.0);
        }
        assert_eq!(player.pos.x, PLAY_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_shoot_respects_cooldown() {
        let mut player = Player::default();
        assert!(player.shoot());
        assert!(!player.shoot());
        assert_eq!(player.bullets.len(), 1);
        assert_eq!(player.bullets[0].pos, Vec2::new(400.0, 520.0));

        for _ in 0..14 {
            player.tick();
            assert!(!player.shoot());
        }
        player.tick();
        assert_eq!(player.shoot_cooldown, 0);
        assert!(player.shoot());
        assert_eq!(player.bullets.len(), 2);
    }

    #[test]
    fn test_bullets_leave_through_the_top() {
        let mut player = Player::default();
        player.shoot();
        // 520 / 8 = 65 ticks to reach y = 0
        for _ in 0..64 {
            player.tick();
        }
        assert_eq!(player.bullets.len(), 1);
        player.tick();
        assert!(player.bullets.is_empty());
    }

    #[test]
    fn test_enemy_kind_cycles_by_row() {
        let kinds: Vec<usize> = (0..6).map(|r| EnemyKind::for_row(r).index()).collect();
        assert_eq!(kinds, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(EnemyKind::Purple.color(), crate::colors::PURPLE);
    }

    #[test]
    fn test_enemy_geometry() {
        let mut enemy = Enemy::new(Vec2::new(100.0, 50.0), EnemyKind::Yellow, 1.0);
        assert_eq!(enemy.muzzle(), Vec2::new(120.0, 85.0));
        assert_eq!(enemy.center(), Vec2::new(120.0, 67.0));
        enemy.move_by(-100.0, 20.0);
        assert!(enemy.touches_side_wall());
        assert_eq!(enemy.rect().bottom(), 105.0);
    }
}
