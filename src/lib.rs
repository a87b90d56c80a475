//! game-2048: rules engine for the 4x4 sliding-tile merge puzzle
//!
//! This crate provides:
//! - An owned `Board` of `Tile`s with bounds-checked accessors (`engine` module)
//! - The cascading slide/merge move engine (`engine::apply_move`, `engine::shift`)
//! - A `Spawner` placing 2 (90%) / 4 (10%) tiles with an injectable RNG
//! - `GameState`, which sequences move → spawn → win/terminal checks and keeps score
//!
//! Quick start:
//! ```
//! use game_2048::{Direction, GameConfig, GameState};
//!
//! // Deterministic game with a seeded spawner
//! let mut game = GameState::new(&GameConfig::default().with_seed(42));
//!
//! while !game.is_done() {
//!     let Some(&dir) = game.available_moves().first() else { break };
//!     game.apply_move(dir);
//! }
//! assert!(game.is_done());
//! println!("{}\nScore: {}\n{}", game.board(), game.current_score(), game.status());
//! ```
//!
//! Rendering and input are left to the caller: `GameState::snapshot` hands out
//! the tile values and `GameState::apply_command` accepts direction words or
//! WASD keys.
//!
pub mod config;
pub mod engine;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use engine::{Board, Direction, MoveOutcome, Snapshot, Spawn, Spawner, Tile};
pub use error::EngineError;
pub use game::{GameState, GameStatus};
