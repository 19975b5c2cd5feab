//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bullet, Enemy, EnemyKind, Particle, Player, PowerUp, PowerUpKind, Star};
use super::rng::RandomSource;
use super::spawner::{EntityIds, spawn_stars};
use crate::achievements::Achievement;
use crate::difficulty::Difficulty;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a difficulty pick
    Start,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver,
}

/// Explosion magnitudes (particle count lives in `particle_count`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSize {
    /// Bullet impact or shield absorb
    Small,
    /// Enemy destroyed
    Medium,
    /// Player hit
    Large,
}

impl ExplosionSize {
    pub fn particle_count(&self) -> usize {
        use crate::consts::*;
        match self {
            ExplosionSize::Small => SPARK_PARTICLES,
            ExplosionSize::Medium => DESTROY_PARTICLES,
            ExplosionSize::Large => HIT_PARTICLES,
        }
    }
}

/// Discrete notifications for audio and UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player fired `bullets` projectiles
    Shoot { bullets: u8 },
    Explosion { pos: Vec2, size: ExplosionSize },
    EnemyDestroyed { kind: EnemyKind, score_value: u64 },
    EnemyEscaped,
    /// Player lost a life
    HitTaken { lives_left: u32 },
    ShieldAbsorbed,
    PowerUpCollected(PowerUpKind),
    LevelUp(u32),
    GameOver { score: u64, level: u32 },
    AchievementUnlocked(Achievement),
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield size
    pub width: f32,
    pub height: f32,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    /// Host time of the last shot, None until the first one
    pub last_shot_ms: Option<f64>,
    pub ids: EntityIds,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run at the start screen
    pub fn new<R: RandomSource + ?Sized>(
        settings: &Settings,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            difficulty,
            phase: GamePhase::Start,
            score: 0,
            lives: settings.starting_lives,
            level: 1,
            time_ticks: 0,
            player: Player::new(settings.width, settings.height),
            bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            stars: spawn_stars(rng, settings.star_count, settings.width, settings.height),
            last_shot_ms: None,
            ids: EntityIds::default(),
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// True once lives run out
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Push an enemy at an explicit position (tests, scripted waves)
    pub fn spawn_enemy_at(&mut self, kind: EnemyKind, pos: Vec2) -> u32 {
        let id = self.ids.next_id();
        let enemy = Enemy::new(id, kind, pos, self.difficulty.speed_multiplier());
        self.enemies.push(enemy);
        id
    }

    /// Push a power-up at an explicit position
    pub fn spawn_power_up_at(&mut self, kind: PowerUpKind, pos: Vec2) -> u32 {
        let id = self.ids.next_id();
        self.power_ups.push(PowerUp::new(id, kind, pos));
        id
    }
}
