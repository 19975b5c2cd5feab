//! Skyfire - a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, scoring)
//! - `difficulty`: Tier table for spawn pressure and enemy speed
//! - `achievements`: Latched unlock flags with a transient notification
//! - `game`: Host-facing controller and phase state machine
//! - `snapshot`: Read-only view handed to renderers/audio
//! - `settings`: Playfield and session configuration

pub mod achievements;
pub mod difficulty;
pub mod game;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use achievements::{Achievement, Achievements};
pub use difficulty::Difficulty;
pub use game::{Command, Direction, Game};
pub use settings::Settings;
pub use snapshot::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the tick-based timers are tuned for
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Milliseconds per tick at the nominal frame rate
    pub const FRAME_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;

    /// Playfield defaults
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance between the player's bottom edge and the playfield floor at spawn
    pub const PLAYER_START_OFFSET: f32 = 40.0;
    pub const STARTING_LIVES: u32 = 3;
    /// Grace period after taking a hit
    pub const INVULNERABLE_TICKS: u32 = 60;
    /// Triple-shot buff duration (~10s)
    pub const TRIPLE_SHOT_TICKS: u32 = 600;

    /// Weapon
    pub const SHOT_COOLDOWN_MS: f64 = 150.0;
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 12.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_DAMAGE: u32 = 1;
    /// Side-bullet spread for triple shot (radians)
    pub const TRIPLE_SHOT_SPREAD: f32 = 0.2;
    /// Bullets above this y are culled
    pub const BULLET_CULL_Y: f32 = -20.0;

    /// Spawning
    /// Extra spawn pressure per level (multiplies the tier rate)
    pub const SPAWN_LEVEL_FACTOR: f32 = 0.1;
    pub const HEAVY_THRESHOLD: f32 = 0.85;
    pub const FAST_THRESHOLD: f32 = 0.65;
    pub const POWER_UP_DROP_CHANCE: f32 = 0.1;
    pub const POWER_UP_SIZE: f32 = 25.0;
    pub const POWER_UP_SPEED: f32 = 1.5;

    /// Scoring and progression
    pub const ESCAPE_PENALTY: u64 = 50;
    pub const POINTS_PER_LEVEL: u64 = 2000;
    pub const ACE_SCORE: u64 = 10_000;
    pub const SURVIVOR_LEVEL: u32 = 5;

    /// Particles
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
    pub const SPARK_PARTICLES: usize = 3;
    pub const DESTROY_PARTICLES: usize = 15;
    pub const HIT_PARTICLES: usize = 20;
    /// Soft cap so long sessions can't grow the particle list unbounded
    pub const MAX_PARTICLES: usize = 512;

    /// Background
    pub const STAR_COUNT: usize = 100;

    /// Achievement toast lifetime
    pub const NOTIFICATION_MS: f64 = 3000.0;
}
