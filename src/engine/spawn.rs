use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::Board;

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Places new tiles using an owned, injectable RNG.
///
/// The RNG is seeded once when the spawner is built; pass a seeded generator
/// for reproducible games.
///
/// ```
/// use game_2048::engine::{Board, Spawner};
/// let mut spawner = Spawner::seeded(123);
/// let mut b = Board::EMPTY;
/// let placed = spawner.spawn(&mut b).unwrap();
/// assert!(placed.value == 2 || placed.value == 4);
/// assert_eq!(b.count_empty(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct Spawner<R = StdRng> {
    rng: R,
}

impl Spawner<StdRng> {
    /// Deterministic spawner from a `u64` seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Spawner seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Spawner { rng }
    }

    /// Draw a new tile value: 2 (90%) or 4 (10%).
    pub fn tile_value(&mut self) -> u32 {
        if self.rng.gen_range(0..10) < 9 {
            2
        } else {
            4
        }
    }

    /// Insert a random tile into a uniformly chosen empty cell.
    ///
    /// Returns `None` and leaves the board untouched when no cell is empty.
    pub fn spawn(&mut self, board: &mut Board) -> Option<Spawn> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            debug!("spawn skipped: board is full");
            return None;
        }
        let (row, col) = empty[self.rng.gen_range(0..empty.len())];
        let value = self.tile_value();
        board.cell_mut(row, col).value = value;
        debug!("spawned {value} at ({row}, {col})");
        Some(Spawn { row, col, value })
    }
}
