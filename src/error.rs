//! Error type shared by the engine and the game orchestrator.
//!
//! Ordinary game flow (a move that changes nothing, a full board, the end of
//! the game) is reported through `MoveOutcome` and the `GameState` flags, never
//! through this type.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate outside the 4x4 grid. Internal traversal never produces
    /// one, so hitting this from inside the crate indicates a bug.
    #[error("cell ({row}, {col}) is outside the 4x4 board")]
    OutOfBounds { row: usize, col: usize },
    /// A direction command that does not name one of the four directions.
    #[error("unrecognized direction: {0:?}")]
    InvalidDirection(String),
}
