//! Read-only frame snapshot
//!
//! What renderers and audio hosts get between frames. Borrowed from the
//! simulation so taking one per frame costs nothing; serialize with `to_json`
//! to hand it to a host.

use serde::Serialize;

use crate::achievements::{Achievement, Achievements, Notification};
use crate::difficulty::Difficulty;
use crate::sim::{Bullet, Enemy, GamePhase, GameState, Particle, Player, PowerUp, Star};

/// Achievement toast with its display text resolved
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Toast {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub expires_at_ms: f64,
}

impl From<Notification> for Toast {
    fn from(notification: Notification) -> Self {
        let achievement = notification.achievement;
        Self {
            id: achievement.id(),
            title: achievement.title(),
            description: achievement.description(),
            expires_at_ms: notification.expires_at_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub difficulty_label: &'static str,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub muted: bool,
    pub width: f32,
    pub height: f32,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub power_ups: &'a [PowerUp],
    pub particles: &'a [Particle],
    pub stars: &'a [Star],
    /// Toast visible at the snapshot time
    pub notification: Option<Toast>,
    pub unlocked: Vec<Achievement>,
}

impl<'a> Snapshot<'a> {
    pub fn new(
        state: &'a GameState,
        achievements: &Achievements,
        muted: bool,
        now_ms: f64,
    ) -> Self {
        Self {
            phase: state.phase,
            difficulty: state.difficulty,
            difficulty_label: state.difficulty.as_str(),
            score: state.score,
            lives: state.lives,
            level: state.level,
            muted,
            width: state.width,
            height: state.height,
            player: &state.player,
            bullets: &state.bullets,
            enemies: &state.enemies,
            power_ups: &state.power_ups,
            particles: &state.particles,
            stars: &state.stars,
            notification: achievements.notification(now_ms).map(Toast::from),
            unlocked: achievements.unlocked().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
