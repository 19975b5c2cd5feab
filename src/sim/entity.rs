//! Entity definitions
//!
//! Positions are top-left anchored in playfield pixels, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Hitbox, Rect};
use crate::consts::*;

/// Fallback colours (0xRRGGBB) renderers use when a sprite isn't loaded
pub mod colors {
    pub const PLAYER: u32 = 0x00ffff;
    pub const SHIELD: u32 = 0x00aaff;
    pub const BULLET: u32 = 0xffff66;
    pub const SPARK: u32 = 0xffff00;
    pub const TRIPLE_SHOT: u32 = 0xff00ff;
    pub const STAR: u32 = 0xffffff;
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick along each held axis
    pub speed: f32,
    /// Ticks of post-hit immunity remaining
    pub invulnerable: u32,
    /// Absorbs the next collision
    pub shield: bool,
    /// Ticks of triple-fire remaining
    pub triple_shot: u32,
    /// Fallback colour
    pub color: u32,
}

impl Player {
    /// Spawn centred horizontally near the bottom of the playfield
    pub fn new(width: f32, height: f32) -> Self {
        let size = Vec2::splat(PLAYER_SIZE);
        Self {
            pos: Vec2::new(
                (width - size.x) / 2.0,
                (height - size.y - PLAYER_START_OFFSET).max(0.0),
            ),
            size,
            speed: PLAYER_SPEED,
            invulnerable: 0,
            shield: false,
            triple_shot: 0,
            color: colors::PLAYER,
        }
    }

    /// Count buff timers down toward zero
    pub fn tick_timers(&mut self) {
        self.invulnerable = self.invulnerable.saturating_sub(1);
        self.triple_shot = self.triple_shot.saturating_sub(1);
    }

    /// Keep the craft fully inside the playfield
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        self.pos.x = self.pos.x.clamp(0.0, (width - self.size.x).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (height - self.size.y).max(0.0));
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

impl Hitbox for Player {
    fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A player projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub damage: u32,
    /// Heading in radians, 0 = straight up
    pub angle: f32,
    pub color: u32,
}

impl Bullet {
    /// Bullet whose top-centre sits at `muzzle`
    pub fn new(id: u32, muzzle: Vec2, angle: f32) -> Self {
        let size = Vec2::new(BULLET_WIDTH, BULLET_HEIGHT);
        Self {
            id,
            pos: Vec2::new(muzzle.x - size.x / 2.0, muzzle.y),
            size,
            speed: BULLET_SPEED,
            damage: BULLET_DAMAGE,
            angle,
            color: colors::BULLET,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.angle.sin(), -self.angle.cos()) * self.speed
    }

    pub fn advance(&mut self) {
        self.pos += self.velocity();
    }
}

impl Hitbox for Bullet {
    fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Heavy,
}

/// Per-type stat block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub width: f32,
    pub height: f32,
    pub hp: u32,
    /// Base speed before the difficulty multiplier
    pub speed: f32,
    pub score_value: u64,
    pub color: u32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Heavy];

    pub fn stats(&self) -> EnemyStats {
        match self {
            EnemyKind::Basic => EnemyStats {
                width: 30.0,
                height: 30.0,
                hp: 1,
                speed: 2.0,
                score_value: 100,
                color: 0xff4444,
            },
            EnemyKind::Fast => EnemyStats {
                width: 25.0,
                height: 25.0,
                hp: 1,
                speed: 4.0,
                score_value: 200,
                color: 0xffaa00,
            },
            EnemyKind::Heavy => EnemyStats {
                width: 50.0,
                height: 50.0,
                hp: 5,
                speed: 1.0,
                score_value: 500,
                color: 0xaa44ff,
            },
        }
    }

    /// Pick a type from a uniform roll in `[0, 1)`
    pub fn from_roll(roll: f32) -> Self {
        if roll > HEAVY_THRESHOLD {
            EnemyKind::Heavy
        } else if roll > FAST_THRESHOLD {
            EnemyKind::Fast
        } else {
            EnemyKind::Basic
        }
    }
}

/// An enemy craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub hp: u32,
    pub max_hp: u32,
    pub score_value: u64,
    pub color: u32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2, speed_multiplier: f32) -> Self {
        let stats = kind.stats();
        Self {
            id,
            kind,
            pos,
            size: Vec2::new(stats.width, stats.height),
            speed: stats.speed * speed_multiplier,
            hp: stats.hp,
            max_hp: stats.hp,
            score_value: stats.score_value,
            color: stats.color,
        }
    }

    /// Apply damage, never dropping below zero. Returns true if this hit killed it.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let was_alive = self.hp > 0;
        self.hp = self.hp.saturating_sub(damage);
        was_alive && self.hp == 0
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

impl Hitbox for Enemy {
    fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    TripleShot,
    Shield,
}

impl PowerUpKind {
    pub fn color(&self) -> u32 {
        match self {
            PowerUpKind::TripleShot => colors::TRIPLE_SHOT,
            PowerUpKind::Shield => colors::SHIELD,
        }
    }
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: u32,
}

impl PowerUp {
    pub fn new(id: u32, kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            size: Vec2::splat(POWER_UP_SIZE),
            speed: POWER_UP_SPEED,
            color: kind.color(),
        }
    }
}

impl Hitbox for PowerUp {
    fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases every tick
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub color: u32,
}

impl Particle {
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= PARTICLE_DECAY;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub color: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_roll_thresholds() {
        assert_eq!(EnemyKind::from_roll(0.0), EnemyKind::Basic);
        assert_eq!(EnemyKind::from_roll(0.65), EnemyKind::Basic);
        assert_eq!(EnemyKind::from_roll(0.66), EnemyKind::Fast);
        assert_eq!(EnemyKind::from_roll(0.85), EnemyKind::Fast);
        assert_eq!(EnemyKind::from_roll(0.86), EnemyKind::Heavy);
    }

    #[test]
    fn test_enemy_stat_table() {
        let heavy = Enemy::new(1, EnemyKind::Heavy, Vec2::ZERO, 2.0);
        assert_eq!(heavy.size, Vec2::new(50.0, 50.0));
        assert_eq!(heavy.hp, 5);
        assert_eq!(heavy.max_hp, 5);
        assert_eq!(heavy.speed, 2.0);
        assert_eq!(heavy.score_value, 500);

        let fast = Enemy::new(2, EnemyKind::Fast, Vec2::ZERO, 0.7);
        assert_eq!(fast.size, Vec2::new(25.0, 25.0));
        assert!((fast.speed - 2.8).abs() < 1e-5);
        assert_eq!(fast.score_value, 200);
    }

    #[test]
    fn test_enemy_colour_from_stat_table() {
        for kind in EnemyKind::ALL {
            let enemy = Enemy::new(1, kind, Vec2::ZERO, 1.0);
            assert_eq!(enemy.color, kind.stats().color);
            assert_eq!(enemy.max_hp, kind.stats().hp);
        }
        let shield = PowerUp::new(2, PowerUpKind::Shield, Vec2::ZERO);
        assert_eq!(shield.color, colors::SHIELD);
        assert_eq!(Player::new(800.0, 600.0).color, colors::PLAYER);
        assert_eq!(Bullet::new(3, Vec2::ZERO, 0.0).color, colors::BULLET);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut enemy = Enemy::new(1, EnemyKind::Basic, Vec2::ZERO, 1.0);
        assert!(enemy.take_damage(1));
        assert!(enemy.is_dead());
        // Already dead: no second kill, hp stays at 0
        assert!(!enemy.take_damage(1));
        assert_eq!(enemy.hp, 0);
    }

    #[test]
    fn test_bullet_velocity() {
        let straight = Bullet::new(1, Vec2::new(100.0, 100.0), 0.0);
        assert_eq!(straight.pos, Vec2::new(98.0, 100.0));
        let v = straight.velocity();
        assert!(v.x.abs() < 1e-6);
        assert!((v.y + BULLET_SPEED).abs() < 1e-6);

        let right = Bullet::new(2, Vec2::ZERO, TRIPLE_SHOT_SPREAD);
        assert!(right.velocity().x > 0.0);
        assert!(right.velocity().y < 0.0);
    }

    #[test]
    fn test_player_clamp() {
        let mut player = Player::new(800.0, 600.0);
        player.pos = Vec2::new(-10.0, 9999.0);
        player.clamp_to(800.0, 600.0);
        assert_eq!(player.pos, Vec2::new(0.0, 560.0));
    }

    #[test]
    fn test_particle_lifetime() {
        let mut particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -1.0),
            life: 1.0,
            max_life: 1.0,
            size: 2.0,
            color: colors::SPARK,
        };
        let mut ticks = 0;
        while particle.is_alive() {
            particle.update();
            ticks += 1;
        }
        assert!((49..=51).contains(&ticks));
        assert_eq!(particle.pos.x, ticks as f32);
    }
}
