//! Turn orchestration: move, conditional spawn, then win/terminal checks.
//!
//! A turn runs to completion before the next input is accepted:
//! 1. the move engine slides/merges the board toward the requested edge;
//! 2. if anything changed, the score grows by the merge total and one tile
//!    is spawned;
//! 3. the won flag (highest tile reached the win tile) and the done flag
//!    (no empty cell and no equal neighbors) are re-evaluated.
//!
//! Winning never stops play; only `done` does.

use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::engine::{self, Board, Direction, MoveOutcome, Snapshot, Spawn, Spawner};
use crate::error::EngineError;

/// Coarse game status exposed to front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// The win tile was reached; play may continue until the board locks up.
    Won,
    /// The board locked up without ever reaching the win tile.
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => f.write_str("Playing"),
            GameStatus::Won => f.write_str("You Won!"),
            GameStatus::Lost => f.write_str("Game Over!"),
        }
    }
}

/// A running game: exclusively owns its board and spawner.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    spawner: Spawner<R>,
    score: u64,
    done: bool,
    won: bool,
    moved: bool,
    win_tile: u32,
}

impl GameState<StdRng> {
    /// Start a new game: seeded from `config.seed` (OS entropy when absent),
    /// with the opening tiles already placed.
    ///
    /// ```
    /// use game_2048::{Direction, GameConfig, GameState};
    /// let mut game = GameState::new(&GameConfig::default().with_seed(42));
    /// assert_eq!(game.board().count_empty(), 14);
    /// let out = game.apply_move(Direction::Left);
    /// assert_eq!(game.current_score(), out.score_delta);
    /// ```
    pub fn new(config: &GameConfig) -> Self {
        let spawner = match config.seed {
            Some(seed) => Spawner::seeded(seed),
            None => Spawner::from_entropy(),
        };
        Self::with_spawner(spawner, config)
    }
}

impl<R: Rng> GameState<R> {
    /// Start a new game on an empty board using the given spawner.
    pub fn with_spawner(spawner: Spawner<R>, config: &GameConfig) -> Self {
        let mut game = Self::from_board(Board::EMPTY, spawner, config);
        for _ in 0..config.opening_tiles {
            game.spawn_tile();
        }
        game
    }

    /// Adopt an existing board without spawning anything. Flags are evaluated
    /// immediately, so a locked board starts out done.
    pub fn from_board(board: Board, spawner: Spawner<R>, config: &GameConfig) -> Self {
        let mut game = GameState {
            board,
            spawner,
            score: 0,
            done: false,
            won: false,
            moved: false,
            win_tile: config.win_tile,
        };
        game.refresh_status();
        game
    }

    /// Apply one move. If it changed the board, the merge total is added to the
    /// score and one tile is spawned. A finished game ignores the request.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.done {
            self.moved = false;
            return MoveOutcome::default();
        }

        let outcome = engine::apply_move(&mut self.board, direction);
        self.moved = outcome.moved;
        if outcome.moved {
            self.score += outcome.score_delta;
            debug!(
                "applied {direction}: +{} (score {})",
                outcome.score_delta, self.score
            );
            self.spawn_tile();
        }
        self.board.reset_blocked();
        outcome
    }

    /// Parse a direction command (`"up"`, `"w"`, ...) and apply it.
    ///
    /// Unknown commands return `EngineError::InvalidDirection` and leave the
    /// game untouched.
    pub fn apply_command(&mut self, command: &str) -> Result<MoveOutcome, EngineError> {
        let direction: Direction = command.parse()?;
        Ok(self.apply_move(direction))
    }

    /// Spawn one tile, then re-evaluate the won/done flags.
    pub fn spawn_tile(&mut self) -> Option<Spawn> {
        let placed = self.spawner.spawn(&mut self.board);
        self.refresh_status();
        placed
    }

    fn refresh_status(&mut self) {
        if !self.won && self.board.highest_tile() >= self.win_tile {
            self.won = true;
            info!("reached {} with score {}", self.win_tile, self.score);
        }
        if !self.done && !self.board.can_move() {
            self.done = true;
            info!(
                "no moves left: score {}, highest tile {}",
                self.score,
                self.board.highest_tile()
            );
        }
    }

    /// Directions that would change the current board.
    pub fn available_moves(&self) -> Vec<Direction> {
        if self.done {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&dir| engine::can_shift(&self.board, dir))
            .collect()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn current_score(&self) -> u64 {
        self.score
    }

    /// Whether the most recently applied move changed the board.
    pub fn moved(&self) -> bool {
        self.moved
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tile values for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.board.values()
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.done {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }
}
