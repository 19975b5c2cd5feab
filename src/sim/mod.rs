//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per host frame
//! - All randomness through a single `RandomSource`
//! - Stable iteration order (insertion order, removals applied after each scan)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod progression;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{Hitbox, Rect};
pub use entity::{Bullet, Enemy, EnemyKind, EnemyStats, Particle, Player, PowerUp, PowerUpKind, Star};
pub use rng::{RandomSource, SequenceRng};
pub use spawner::{EntityIds, try_spawn_enemy, try_spawn_power_up};
pub use state::{ExplosionSize, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
