//! Host-facing game controller
//!
//! Owns the simulation state, the achievement tracker and the generator, and
//! runs the phase state machine:
//!
//! ```text
//! Start --start--> Playing <--pause--> Paused
//!                  Playing --lives==0--> GameOver
//! GameOver --restart--> Start      Paused --restart--> Start
//! ```
//!
//! The host calls `frame` once per display refresh; only `Playing` advances
//! the simulation.

use glam::Vec2;
use rand_pcg::Pcg32;

use crate::achievements::Achievements;
use crate::difficulty::Difficulty;
use crate::settings::Settings;
use crate::sim::rng::{self, RandomSource};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::snapshot::Snapshot;

/// Held movement axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete input events from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Leave the start screen with the chosen tier
    Start(Difficulty),
    /// Back to the start screen from pause or game over
    Restart,
    TogglePause,
    /// Audio only; the simulation just reports the flag
    ToggleMute,
    /// Key press/release for one axis
    Direction(Direction, bool),
    /// Fire button press/release
    Fire(bool),
    /// Pointer/touch position (None when released)
    Pointer(Option<Vec2>),
}

/// Game instance holding all state
pub struct Game<R: RandomSource = Pcg32> {
    settings: Settings,
    state: GameState,
    /// Survives restarts for the life of the process
    achievements: Achievements,
    rng: R,
    input: TickInput,
    muted: bool,
}

impl Game<Pcg32> {
    /// New session with the default seeded generator
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, rng::seeded(seed))
    }
}

impl<R: RandomSource> Game<R> {
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        let state = GameState::new(&settings, settings.difficulty, &mut rng);
        let muted = settings.muted;
        Self {
            settings,
            state,
            achievements: Achievements::new(),
            rng,
            input: TickInput::default(),
            muted,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Read-only view of the simulation
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Input that will be held for the next frame
    pub fn input(&self) -> &TickInput {
        &self.input
    }

    /// Replace the held input wholesale (demo mode, replays)
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    /// Apply one host event. Commands that don't apply to the current phase
    /// are ignored.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Start(difficulty) => self.start(difficulty),
            Command::Restart => self.restart(),
            Command::TogglePause => self.toggle_pause(),
            Command::ToggleMute => {
                self.muted = !self.muted;
                log::debug!("Muted: {}", self.muted);
            }
            Command::Direction(direction, held) => match direction {
                Direction::Up => self.input.up = held,
                Direction::Down => self.input.down = held,
                Direction::Left => self.input.left = held,
                Direction::Right => self.input.right = held,
            },
            Command::Fire(held) => self.input.fire = held,
            Command::Pointer(pos) => self.input.pointer = pos,
        }
    }

    /// Run one frame. Returns the events raised during it.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        self.achievements.expire(now_ms);
        if self.state.phase == GamePhase::Playing {
            tick(
                &mut self.state,
                &self.input,
                now_ms,
                &mut self.rng,
                &mut self.achievements,
            );
        }
        self.state.drain_events()
    }

    /// Borrowed snapshot for renderers
    pub fn snapshot(&self, now_ms: f64) -> Snapshot<'_> {
        Snapshot::new(&self.state, &self.achievements, self.muted, now_ms)
    }

    fn start(&mut self, difficulty: Difficulty) {
        if self.state.phase != GamePhase::Start {
            log::debug!("Ignoring start in {:?}", self.state.phase);
            return;
        }
        self.state = GameState::new(&self.settings, difficulty, &mut self.rng);
        self.state.phase = GamePhase::Playing;
        self.input = TickInput::default();
        log::info!("Started new game on {}", difficulty);
    }

    fn restart(&mut self) {
        match self.state.phase {
            GamePhase::Paused | GamePhase::GameOver => {
                let difficulty = self.state.difficulty;
                self.state = GameState::new(&self.settings, difficulty, &mut self.rng);
                self.input = TickInput::default();
                log::info!("Returned to start screen");
            }
            phase => log::debug!("Ignoring restart in {:?}", phase),
        }
    }

    fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            phase => {
                log::debug!("Ignoring pause in {:?}", phase);
                return;
            }
        };
        log::info!("Phase -> {:?}", self.state.phase);
    }
}
