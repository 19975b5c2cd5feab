//! Score, lives and level rules
//!
//! Each rule maps the previous counter value to the next one, so several
//! collision events touching the same counter in one tick compose cleanly.

use crate::consts::*;

/// Score after a kill worth `points`
#[inline]
pub fn award(score: u64, points: u64) -> u64 {
    score.saturating_add(points)
}

/// Score after an enemy slips past the bottom edge (floored at 0)
#[inline]
pub fn escape_penalty(score: u64) -> u64 {
    score.saturating_sub(ESCAPE_PENALTY)
}

/// Lives after taking a hit
#[inline]
pub fn lose_life(lives: u32) -> u32 {
    lives.saturating_sub(1)
}

/// Score that must be exceeded to leave `level`
#[inline]
pub fn level_threshold(level: u32) -> u64 {
    level as u64 * POINTS_PER_LEVEL
}

#[inline]
pub fn should_level_up(score: u64, level: u32) -> bool {
    score > level_threshold(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_penalty_floor() {
        assert_eq!(escape_penalty(30), 0);
        assert_eq!(escape_penalty(50), 0);
        assert_eq!(escape_penalty(120), 70);
    }

    #[test]
    fn test_level_thresholds() {
        assert!(!should_level_up(2000, 1));
        assert!(should_level_up(2001, 1));
        assert!(!should_level_up(8000, 4));
        assert!(should_level_up(8001, 4));
    }

    #[test]
    fn test_lives_floor() {
        assert_eq!(lose_life(1), 0);
        assert_eq!(lose_life(0), 0);
    }

    proptest! {
        #[test]
        fn prop_penalties_never_underflow(start in 0u64..1_000, escapes in 0usize..50) {
            let mut score = start;
            for _ in 0..escapes {
                let next = escape_penalty(score);
                prop_assert!(next <= score);
                score = next;
            }
            prop_assert_eq!(score, start.saturating_sub(ESCAPE_PENALTY * escapes as u64));
        }

        #[test]
        fn prop_award_is_monotonic(score in 0u64..u64::MAX / 2, points in 0u64..10_000) {
            prop_assert!(award(score, points) >= score);
        }
    }
}
