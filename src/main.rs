//! Skyfire entry point
//!
//! Runs a headless demo: the autopilot plays a seeded session and the
//! result is logged. Interactive hosts drive `skyfire::Game` directly.
//!
//! Usage: `skyfire [difficulty] [seed] [frames]`

use skyfire::consts::FRAME_MS;
use skyfire::sim::{GameEvent, autopilot_input};
use skyfire::{Command, Difficulty, Game, Settings};

const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_FRAMES: u64 = 60 * 60 * 3;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let difficulty = match args.first() {
        Some(arg) => Difficulty::from_str(arg).unwrap_or_else(|| {
            log::warn!("Unknown difficulty {:?}, using {}", arg, Difficulty::default());
            Difficulty::default()
        }),
        None => Difficulty::default(),
    };
    let seed = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let frames = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    log::info!(
        "Skyfire demo starting: {} difficulty, seed {}, {} frames",
        difficulty,
        seed,
        frames
    );

    let mut game = Game::new(Settings::load(), seed);
    game.handle(Command::Start(difficulty));

    let mut kills = 0u32;
    let mut shots = 0u32;
    for frame in 0..frames {
        let input = autopilot_input(game.state());
        game.set_input(input);

        for event in game.frame(frame as f64 * FRAME_MS) {
            match event {
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                GameEvent::Shoot { bullets } => shots += bullets as u32,
                GameEvent::LevelUp(level) => log::info!("Frame {}: level {}", frame, level),
                _ => {}
            }
        }

        if game.state().is_over() {
            log::info!("Frame {}: out of lives", frame);
            break;
        }
    }

    let state = game.state();
    println!(
        "{}: score {} | level {} | lives {} | kills {} | shots {} | ticks {}",
        difficulty, state.score, state.level, state.lives, kills, shots, state.time_ticks
    );
    let unlocked: Vec<_> = game.achievements().unlocked().map(|a| a.title()).collect();
    if unlocked.is_empty() {
        println!("Achievements: none");
    } else {
        println!("Achievements: {}", unlocked.join(", "));
    }
}

