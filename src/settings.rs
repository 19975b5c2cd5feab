//! Session settings
//!
//! Playfield geometry and defaults the host hands to `Game::new`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::difficulty::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Lives at the start of each run
    pub starting_lives: u32,
    /// Background stars
    pub star_count: usize,
    /// Tier preselected on the start screen
    pub difficulty: Difficulty,
    /// Start muted (audio collaborator only)
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            starting_lives: STARTING_LIVES,
            star_count: STAR_COUNT,
            difficulty: Difficulty::default(),
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings. Native builds have no backing store.
    pub fn load() -> Self {
        Self::default()
    }

    /// Clamp values the simulation can't work with
    fn sanitize(&mut self) {
        let min_side = PLAYER_SIZE * 2.0;
        if !self.width.is_finite() || self.width < min_side {
            log::warn!("Playfield width {} too small, using {}", self.width, min_side);
            self.width = min_side;
        }
        if !self.height.is_finite() || self.height < min_side {
            log::warn!("Playfield height {} too small, using {}", self.height, min_side);
            self.height = min_side;
        }
        self.starting_lives = self.starting_lives.max(1);
    }
}
