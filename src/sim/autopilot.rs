//! Demo-mode pilot
//!
//! Produces the input a simple bot would hold this tick: dodge anything about
//! to land on the craft, otherwise chase pickups and line up under the
//! lowest enemy while holding fire.

use super::state::GameState;
use super::tick::TickInput;

/// How far above the craft an enemy counts as an incoming threat
const DODGE_LOOKAHEAD: f32 = 120.0;
/// Horizontal slack added to both sides of the craft when looking for threats
const DODGE_MARGIN: f32 = 10.0;

pub fn autopilot_input(state: &GameState) -> TickInput {
    let player = &state.player;
    let center_x = player.center().x;
    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };

    let left_edge = player.pos.x - DODGE_MARGIN;
    let right_edge = player.pos.x + player.size.x + DODGE_MARGIN;
    let threat = state
        .enemies
        .iter()
        .filter(|e| {
            let bottom = e.pos.y + e.size.y;
            bottom > player.pos.y - DODGE_LOOKAHEAD
                && e.pos.y < player.pos.y + player.size.y
                && e.pos.x < right_edge
                && e.pos.x + e.size.x > left_edge
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(threat) = threat {
        if player.invulnerable == 0 && !player.shield {
            // Step away from the threat, toward the roomier side at the walls
            let go_right = threat.center().x < center_x;
            let blocked = if go_right {
                player.pos.x + player.size.x >= state.width
            } else {
                player.pos.x <= 0.0
            };
            if go_right != blocked {
                input.right = true;
            } else {
                input.left = true;
            }
            return input;
        }
    }

    let target_x = state
        .power_ups
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|p| p.pos.x + p.size.x / 2.0)
        .or_else(|| {
            state
                .enemies
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|e| e.center().x)
        });

    if let Some(target_x) = target_x {
        let dx = target_x - center_x;
        if dx > player.speed {
            input.right = true;
        } else if dx < -player.speed {
            input.left = true;
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::settings::Settings;
    use crate::sim::entity::{EnemyKind, PowerUpKind};
    use crate::sim::rng::seeded;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(&Settings::default(), Difficulty::Normal, &mut seeded(5))
    }

    #[test]
    fn test_always_fires() {
        assert!(autopilot_input(&state()).fire);
    }

    #[test]
    fn test_dodges_incoming_enemy() {
        let mut state = state();
        // Player spans x 380..420; enemy slightly left of centre, just above
        let pos = Vec2::new(370.0, state.player.pos.y - 60.0);
        state.spawn_enemy_at(EnemyKind::Basic, pos);
        let input = autopilot_input(&state);
        assert!(input.right);
        assert!(!input.left);
    }

    #[test]
    fn test_dodges_away_from_wall() {
        let mut state = state();
        state.player.pos.x = 0.0;
        let pos = Vec2::new(30.0, state.player.pos.y - 40.0);
        state.spawn_enemy_at(EnemyKind::Basic, pos);
        // Threat is to the right, but the left wall blocks; still go right
        let input = autopilot_input(&state);
        assert!(input.right);
    }

    #[test]
    fn test_lines_up_under_enemy() {
        let mut state = state();
        state.spawn_enemy_at(EnemyKind::Basic, Vec2::new(100.0, 50.0));
        let input = autopilot_input(&state);
        assert!(input.left);
    }

    #[test]
    fn test_prefers_power_up() {
        let mut state = state();
        state.spawn_enemy_at(EnemyKind::Basic, Vec2::new(100.0, 50.0));
        state.spawn_power_up_at(PowerUpKind::Shield, Vec2::new(700.0, 200.0));
        let input = autopilot_input(&state);
        assert!(input.right);
    }
}
