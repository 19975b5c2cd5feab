//! Achievement tracker
//!
//! Unlocks are latched: once set, a flag never clears for the life of the
//! tracker. Each fresh unlock raises a toast that expires after
//! `NOTIFICATION_MS`; a newer unlock replaces the visible one.

use serde::{Deserialize, Serialize};

use crate::consts::NOTIFICATION_MS;

/// Unlockable achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// Destroy an enemy
    FirstBlood,
    /// Reach 10,000 points
    Ace,
    /// Absorb a hit with the shield
    Untouchable,
    /// Collect a power-up
    PowerUp,
    /// Reach level 5
    Survivor,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstBlood,
        Achievement::Ace,
        Achievement::Untouchable,
        Achievement::PowerUp,
        Achievement::Survivor,
    ];

    /// Stable identifier used by hosts
    pub fn id(&self) -> &'static str {
        match self {
            Achievement::FirstBlood => "first_blood",
            Achievement::Ace => "ace",
            Achievement::Untouchable => "untouchable",
            Achievement::PowerUp => "power_up",
            Achievement::Survivor => "survivor",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstBlood => "First Blood",
            Achievement::Ace => "Ace Pilot",
            Achievement::Untouchable => "Untouchable",
            Achievement::PowerUp => "Powered Up",
            Achievement::Survivor => "Survivor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstBlood => "Destroy your first enemy",
            Achievement::Ace => "Score 10,000 points",
            Achievement::Untouchable => "Block a collision with a shield",
            Achievement::PowerUp => "Collect a power-up",
            Achievement::Survivor => "Reach level 5",
        }
    }

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// A toast for the most recent unlock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub achievement: Achievement,
    /// Host timestamp (ms) after which the toast is hidden
    pub expires_at_ms: f64,
}

/// Set of unlocked achievements plus the pending toast
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievements {
    unlocked: u8,
    notification: Option<Notification>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlock an achievement. Returns true only on the first unlock.
    pub fn unlock(&mut self, achievement: Achievement, now_ms: f64) -> bool {
        if self.is_unlocked(achievement) {
            return false;
        }
        self.unlocked |= achievement.bit();
        self.notification = Some(Notification {
            achievement,
            expires_at_ms: now_ms + NOTIFICATION_MS,
        });
        log::info!("Achievement unlocked: {}", achievement.title());
        true
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked & achievement.bit() != 0
    }

    /// Unlocked achievements in declaration order
    pub fn unlocked(&self) -> impl Iterator<Item = Achievement> + '_ {
        Achievement::ALL
            .into_iter()
            .filter(|a| self.is_unlocked(*a))
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.count_ones() as usize
    }

    /// The toast visible at `now_ms`, if any
    pub fn notification(&self, now_ms: f64) -> Option<Notification> {
        self.notification.filter(|n| now_ms < n.expires_at_ms)
    }

    /// Drop the toast once its display time has passed
    pub fn expire(&mut self, now_ms: f64) {
        if self.notification.is_some_and(|n| now_ms >= n.expires_at_ms) {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_is_idempotent() {
        let mut achievements = Achievements::new();
        assert!(achievements.unlock(Achievement::FirstBlood, 0.0));
        let toast = achievements.notification(10.0);

        assert!(!achievements.unlock(Achievement::FirstBlood, 500.0));
        assert_eq!(achievements.unlocked_count(), 1);
        // Re-trigger must not refresh the toast
        assert_eq!(achievements.notification(10.0), toast);
        assert_eq!(
            achievements.notification(10.0).map(|n| n.expires_at_ms),
            Some(NOTIFICATION_MS)
        );
    }

    #[test]
    fn test_notification_expires() {
        let mut achievements = Achievements::new();
        achievements.unlock(Achievement::Ace, 1000.0);
        assert!(achievements.notification(3999.0).is_some());
        assert!(achievements.notification(4000.0).is_none());

        achievements.expire(3999.0);
        assert!(achievements.notification(3999.0).is_some());
        achievements.expire(4000.0);
        assert!(achievements.notification(0.0).is_none());
    }

    #[test]
    fn test_newer_unlock_replaces_toast() {
        let mut achievements = Achievements::new();
        achievements.unlock(Achievement::FirstBlood, 0.0);
        achievements.unlock(Achievement::PowerUp, 100.0);

        let toast = achievements.notification(200.0).unwrap();
        assert_eq!(toast.achievement, Achievement::PowerUp);
        assert_eq!(toast.expires_at_ms, 100.0 + NOTIFICATION_MS);
    }

    #[test]
    fn test_unlocked_iter_order() {
        let mut achievements = Achievements::new();
        achievements.unlock(Achievement::Survivor, 0.0);
        achievements.unlock(Achievement::FirstBlood, 0.0);
        let ids: Vec<_> = achievements.unlocked().map(|a| a.id()).collect();
        assert_eq!(ids, ["first_blood", "survivor"]);
    }

    #[test]
    fn test_ids_roundtrip() {
        for achievement in Achievement::ALL {
            assert_eq!(Achievement::from_id(achievement.id()), Some(achievement));
        }
        assert_eq!(Achievement::from_id("pacifist"), None);
    }
}
