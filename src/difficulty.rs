//! Difficulty tiers
//!
//! Each tier fixes a per-tick spawn probability and a multiplier applied to
//! every enemy's base speed.

use serde::{Deserialize, Serialize};

/// Difficulty tier selected on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
    Insane,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Insane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::Insane => "Insane",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            "insane" => Some(Difficulty::Insane),
            _ => None,
        }
    }

    /// Probability per tick of an enemy spawn (before level scaling)
    pub fn spawn_rate(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.01,
            Difficulty::Normal => 0.02,
            Difficulty::Hard => 0.035,
            Difficulty::Expert => 0.05,
            Difficulty::Insane => 0.08,
        }
    }

    /// Multiplier on base enemy speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
            Difficulty::Expert => 1.6,
            Difficulty::Insane => 2.0,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_ordered() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].spawn_rate() < pair[1].spawn_rate());
            assert!(pair[0].speed_multiplier() < pair[1].speed_multiplier());
        }
    }

    #[test]
    fn test_table_bounds() {
        for tier in Difficulty::ALL {
            assert!((0.01..=0.08).contains(&tier.spawn_rate()));
            assert!((0.7..=2.0).contains(&tier.speed_multiplier()));
        }
    }

    #[test]
    fn test_label_roundtrip() {
        for tier in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(Difficulty::from_str(" INSANE "), Some(Difficulty::Insane));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}
