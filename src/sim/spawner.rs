//! Spawning: enemies, power-up drops, explosions and the star field

use glam::Vec2;

use serde::{Deserialize, Serialize};

use super::entity::{Enemy, EnemyKind, Particle, PowerUp, PowerUpKind, Star, colors};
use super::rng::RandomSource;
use crate::consts::*;
use crate::difficulty::Difficulty;

/// Monotonic entity ID allocator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Per-tick spawn probability after level scaling
pub fn spawn_chance(level: u32, difficulty: Difficulty) -> f32 {
    difficulty.spawn_rate() * (1.0 + level as f32 * SPAWN_LEVEL_FACTOR)
}

/// Roll for a new enemy just above the top edge.
///
/// Draws once for the spawn decision and, on success, once for the type and
/// once for the x position.
pub fn try_spawn_enemy<R: RandomSource + ?Sized>(
    rng: &mut R,
    ids: &mut EntityIds,
    level: u32,
    difficulty: Difficulty,
    width: f32,
) -> Option<Enemy> {
    if rng.next_unit() >= spawn_chance(level, difficulty) {
        return None;
    }

    let kind = EnemyKind::from_roll(rng.next_unit());
    let stats = kind.stats();
    let x = rng.range(0.0, (width - stats.width).max(0.0));
    let pos = Vec2::new(x, -stats.height);

    log::debug!("Spawned {:?} at x={:.0}", kind, x);
    Some(Enemy::new(ids.next_id(), kind, pos, difficulty.speed_multiplier()))
}

/// Roll for a loot drop where an enemy died
pub fn try_spawn_power_up<R: RandomSource + ?Sized>(
    rng: &mut R,
    ids: &mut EntityIds,
    pos: Vec2,
) -> Option<PowerUp> {
    if !rng.chance(POWER_UP_DROP_CHANCE) {
        return None;
    }
    let kind = if rng.next_unit() < 0.5 {
        PowerUpKind::TripleShot
    } else {
        PowerUpKind::Shield
    };
    Some(PowerUp::new(ids.next_id(), kind, pos))
}

/// Burst of `count` particles at `origin`
pub fn spawn_explosion<R: RandomSource + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    color: u32,
    count: usize,
) {
    // Keep the newest effects when the cap is hit
    let overflow = (particles.len() + count).saturating_sub(MAX_PARTICLES);
    if overflow > 0 {
        particles.drain(..overflow.min(particles.len()));
    }

    for _ in 0..count {
        let vel = Vec2::new(
            rng.range(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED),
            rng.range(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED),
        );
        particles.push(Particle {
            pos: origin,
            vel,
            life: 1.0,
            max_life: 1.0,
            size: rng.range(2.0, 5.0),
            color,
        });
    }
}

/// Fresh star field scattered over the whole playfield
pub fn spawn_stars<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f32,
    height: f32,
) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            size: rng.range(0.5, 2.5),
            speed: rng.range(0.5, 3.0),
            color: colors::STAR,
        })
        .collect()
}
