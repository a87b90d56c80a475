//! Engine module: the 4x4 board, the slide/merge move engine, and the tile
//! spawner. Public API stays small and ergonomic.
//!
//! - `Board` is the owned grid with bounds-checked accessors.
//! - `apply_move`/`shift` run the cascading slide/merge for one direction.
//! - `Spawner` places 2/4 tiles with an injectable RNG.

mod ops;
mod spawn;
pub mod state;

pub use state::{Board, Direction, Snapshot, Tile, SIZE};

pub use ops::{apply_move, can_shift, shift, MoveOutcome};
pub use spawn::{Spawn, Spawner};
