//! Per-frame simulation tick
//!
//! One call advances a `Playing` state by exactly one step. The order of the
//! sub-steps is part of the game rules; see `tick`.

use glam::Vec2;

use super::collision::Hitbox;
use super::entity::{Bullet, PowerUpKind, colors};
use super::progression;
use super::rng::RandomSource;
use super::spawner::{spawn_explosion, try_spawn_enemy, try_spawn_power_up};
use super::state::{ExplosionSize, GameEvent, GamePhase, GameState};
use crate::achievements::{Achievement, Achievements};
use crate::consts::*;

/// Held input for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire button held
    pub fire: bool,
    /// Absolute craft centre from pointer/touch, applied before held directions
    pub pointer: Option<Vec2>,
}

/// Advance the game state by one step.
///
/// Does nothing unless the phase is `Playing`. `now_ms` is the host's
/// monotonic frame timestamp and only drives the fire cooldown and
/// achievement toasts.
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    now_ms: f64,
    rng: &mut R,
    achievements: &mut Achievements,
) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    update_stars(state, rng);
    move_player(state, input);
    state.player.tick_timers();
    fire(state, input, now_ms);
    update_bullets(state);

    if let Some(enemy) = try_spawn_enemy(
        rng,
        &mut state.ids,
        state.level,
        state.difficulty,
        state.width,
    ) {
        state.enemies.push(enemy);
    }

    resolve_enemies(state, rng, achievements, now_ms);
    update_power_ups(state, achievements, now_ms);

    for particle in state.particles.iter_mut() {
        particle.update();
    }
    state.particles.retain(|p| p.is_alive());

    check_level_up(state, achievements, now_ms);
    achievements.expire(now_ms);
}

fn unlock(state: &mut GameState, achievements: &mut Achievements, id: Achievement, now_ms: f64) {
    if achievements.unlock(id, now_ms) {
        state.push_event(GameEvent::AchievementUnlocked(id));
    }
}

fn explode<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    pos: Vec2,
    color: u32,
    size: ExplosionSize,
) {
    spawn_explosion(&mut state.particles, rng, pos, color, size.particle_count());
    state.push_event(GameEvent::Explosion { pos, size });
}

fn update_stars<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    for star in state.stars.iter_mut() {
        star.pos.y += star.speed;
        if star.pos.y > state.height {
            star.pos.y = 0.0;
            star.pos.x = rng.range(0.0, state.width);
        }
    }
}

/// Held axes are summed without normalisation, so diagonals move faster.
fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if let Some(target) = input.pointer {
        player.pos = target - player.size * 0.5;
    }

    let mut dir = Vec2::ZERO;
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    player.pos += dir * player.speed;
    player.clamp_to(state.width, state.height);
}

fn fire(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if !input.fire {
        return;
    }
    if let Some(last) = state.last_shot_ms {
        if now_ms - last < SHOT_COOLDOWN_MS {
            return;
        }
    }

    let muzzle = Vec2::new(state.player.center().x, state.player.pos.y);
    let angles: &[f32] = if state.player.triple_shot > 0 {
        &[-TRIPLE_SHOT_SPREAD, 0.0, TRIPLE_SHOT_SPREAD]
    } else {
        &[0.0]
    };

    for &angle in angles {
        let id = state.ids.next_id();
        state.bullets.push(Bullet::new(id, muzzle, angle));
    }
    state.last_shot_ms = Some(now_ms);
    state.push_event(GameEvent::Shoot {
        bullets: angles.len() as u8,
    });
}

fn update_bullets(state: &mut GameState) {
    for bullet in state.bullets.iter_mut() {
        bullet.advance();
    }
    state.bullets.retain(|b| b.pos.y >= BULLET_CULL_Y);
}

/// Move enemies and resolve their collisions with the player and bullets.
///
/// Removals are flagged during the scan and applied afterwards.
fn resolve_enemies<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    achievements: &mut Achievements,
    now_ms: f64,
) {
    let mut enemy_alive = vec![true; state.enemies.len()];
    let mut bullet_alive = vec![true; state.bullets.len()];

    for i in 0..state.enemies.len() {
        state.enemies[i].pos.y += state.enemies[i].speed;

        // Player collision (ignored during the grace period)
        if state.player.invulnerable == 0 && state.enemies[i].hits(&state.player) {
            enemy_alive[i] = false;
            let center = state.enemies[i].center();
            if state.player.shield {
                state.player.shield = false;
                unlock(state, achievements, Achievement::Untouchable, now_ms);
                explode(state, rng, center, colors::SHIELD, ExplosionSize::Small);
                state.push_event(GameEvent::ShieldAbsorbed);
            } else {
                state.lives = progression::lose_life(state.lives);
                state.player.invulnerable = INVULNERABLE_TICKS;
                let player_center = state.player.center();
                explode(state, rng, player_center, colors::PLAYER, ExplosionSize::Large);
                state.push_event(GameEvent::HitTaken {
                    lives_left: state.lives,
                });
                if state.lives == 0 {
                    game_over(state);
                }
            }
            continue;
        }

        // Bullet collisions; every overlapping live bullet is spent
        for j in 0..state.bullets.len() {
            if !bullet_alive[j] || !state.bullets[j].hits(&state.enemies[i]) {
                continue;
            }
            bullet_alive[j] = false;
            let impact = state.bullets[j].pos;
            let damage = state.bullets[j].damage;
            explode(state, rng, impact, colors::SPARK, ExplosionSize::Small);

            if state.enemies[i].take_damage(damage) {
                enemy_alive[i] = false;
                destroy_enemy(state, i, rng, achievements, now_ms);
            }
        }
        if !enemy_alive[i] {
            continue;
        }

        if state.enemies[i].pos.y > state.height {
            enemy_alive[i] = false;
            state.score = progression::escape_penalty(state.score);
            state.push_event(GameEvent::EnemyEscaped);
        }
    }

    let mut alive = enemy_alive.into_iter();
    state.enemies.retain(|_| alive.next().unwrap_or(false));
    let mut alive = bullet_alive.into_iter();
    state.bullets.retain(|_| alive.next().unwrap_or(false));
}

fn destroy_enemy<R: RandomSource + ?Sized>(
    state: &mut GameState,
    index: usize,
    rng: &mut R,
    achievements: &mut Achievements,
    now_ms: f64,
) {
    let (kind, pos, center, value, color) = {
        let enemy = &state.enemies[index];
        (enemy.kind, enemy.pos, enemy.center(), enemy.score_value, enemy.color)
    };

    explode(state, rng, center, color, ExplosionSize::Medium);
    state.score = progression::award(state.score, value);
    state.push_event(GameEvent::EnemyDestroyed {
        kind,
        score_value: value,
    });

    if state.score >= ACE_SCORE {
        unlock(state, achievements, Achievement::Ace, now_ms);
    }
    unlock(state, achievements, Achievement::FirstBlood, now_ms);

    if let Some(power_up) = try_spawn_power_up(rng, &mut state.ids, pos) {
        log::debug!("Dropped {:?}", power_up.kind);
        state.power_ups.push(power_up);
    }
}

fn update_power_ups(state: &mut GameState, achievements: &mut Achievements, now_ms: f64) {
    let mut collected = Vec::new();
    let height = state.height;
    let player = &state.player;

    state.power_ups.retain_mut(|power_up| {
        power_up.pos.y += power_up.speed;
        if power_up.hits(player) {
            collected.push(power_up.kind);
            return false;
        }
        power_up.pos.y <= height
    });

    for kind in collected {
        unlock(state, achievements, Achievement::PowerUp, now_ms);
        match kind {
            PowerUpKind::TripleShot => state.player.triple_shot = TRIPLE_SHOT_TICKS,
            PowerUpKind::Shield => state.player.shield = true,
        }
        state.push_event(GameEvent::PowerUpCollected(kind));
    }
}

fn check_level_up(state: &mut GameState, achievements: &mut Achievements, now_ms: f64) {
    if !progression::should_level_up(state.score, state.level) {
        return;
    }
    state.level += 1;
    state.enemies.clear();
    log::info!("Level {} reached (score {})", state.level, state.score);
    state.push_event(GameEvent::LevelUp(state.level));

    if state.level >= SURVIVOR_LEVEL {
        unlock(state, achievements, Achievement::Survivor, now_ms);
    }
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over: score {} at level {} ({})",
        state.score,
        state.level,
        state.difficulty
    );
    state.push_event(GameEvent::GameOver {
        score: state.score,
        level: state.level,
    });
}
