//! Collision detection
//!
//! Bullets are treated as points and tested against actor rectangles with a
//! strict inside test: a point on an edge is a miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Enemy;
use super::entity::Bullet;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Point strictly inside (edges excluded)
    #[inline]
    pub fn contains_strict(&self, point: Vec2) -> bool {
        self.left() < point.x
            && point.x < self.right()
            && self.top() < point.y
            && point.y < self.bottom()
    }
}

/// A player bullet that struck an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub bullet: usize,
    pub enemy: usize,
}

/// Pair player bullets with the enemies they strike.
///
/// Bullets are visited in order and each takes the first enemy it is inside
/// of that no earlier bullet already claimed. A bullet that only overlaps
/// claimed enemies is left alone and survives the tick.
pub fn player_shots_vs_enemies(bullets: &[Bullet], enemies: &[Enemy]) -> Vec<Hit> {
    let mut claimed = vec![false; enemies.len()];
    let mut hits = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        let target = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !claimed[*ei] && enemy.rect().contains_strict(bullet.pos));
        if let Some((ei, _)) = target {
            claimed[ei] = true;
            hits.push(Hit {
                bullet: bi,
                enemy: ei,
            });
        }
    }

    hits
}

/// Indices of enemy bullets inside the player's rectangle, in order
pub fn enemy_shots_vs_player(bullets: &[Bullet], player: &Rect) -> Vec<usize> {
    bullets
        .iter()
        .enumerate()
        .filter(|(_, b)| player.contains_strict(b.pos))
        .map(|(i, _)| i)
        .collect()
}

/// Keep only the items whose index is not listed in `removed`.
///
/// `removed` may be in any order and may contain duplicates.
pub fn remove_indices<T>(items: &mut Vec<T>, removed: &[usize]) {
    if removed.is_empty() {
        return;
    }
    let mut drop = vec![false; items.len()];
    for &i in removed {
        if let Some(flag) = drop.get_mut(i) {
            *flag = true;
        }
    }
    let mut index = 0;
    items.retain(|_| {
        let keep = !drop[index];
        index += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{CYAN, RED};
    use crate::sim::actor::EnemyKind;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy::new(Vec2::new(x, y), EnemyKind::Green, 0.0)
    }

    #[test]
    fn test_contains_strict_excludes_edges() {
        let r = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(40.0, 35.0));
        assert!(r.contains_strict(Vec2::new(30.0, 20.0)));
        assert!(!r.contains_strict(Vec2::new(10.0, 20.0)));
        assert!(!r.contains_strict(Vec2::new(50.0, 20.0)));
        assert!(!r.contains_strict(Vec2::new(30.0, 10.0)));
        assert!(!r.contains_strict(Vec2::new(30.0, 45.0)));
        assert_eq!(r.center(), Vec2::new(30.0, 27.5));
    }

    #[test]
    fn test_first_match_wins() {
        let enemies = vec![enemy_at(100.0, 50.0), enemy_at(300.0, 50.0)];
        let bullets = vec![
            Bullet::new(Vec2::new(120.0, 60.0), -8.0, CYAN),
            Bullet::new(Vec2::new(121.0, 61.0), -8.0, CYAN),
            Bullet::new(Vec2::new(320.0, 60.0), -8.0, CYAN),
            Bullet::new(Vec2::new(700.0, 60.0), -8.0, CYAN),
        ];
        let hits = player_shots_vs_enemies(&bullets, &enemies);
        assert_eq!(
            hits,
            vec![
                Hit {
                    bullet: 0,
                    enemy: 0,
                },
                Hit {
                    bullet: 2,
                    enemy: 1,
                },
            ]
        );
    }

    #[test]
    fn test_enemy_shots_vs_player() {
        let player = Rect::new(Vec2::new(375.0, 520.0), Vec2::new(50.0, 40.0));
        let bullets = vec![
            Bullet::new(Vec2::new(400.0, 540.0), 4.0, RED),
            Bullet::new(Vec2::new(100.0, 540.0), 4.0, RED),
            Bullet::new(Vec2::new(376.0, 559.0), 4.0, RED),
        ];
        assert_eq!(enemy_shots_vs_player(&bullets, &player), vec![0, 2]);
    }

    #[test]
    fn test_remove_indices() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        remove_indices(&mut items, &[3, 0, 3, 99]);
        assert_eq!(items, vec!['b', 'c', 'e']);
    }
}
