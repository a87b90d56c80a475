use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Tile value grid in row-major order, as handed to renderers.
pub type Snapshot = [[u32; SIZE]; SIZE];

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in `from_u8` order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// 0=Up, 1=Down, 2=Left, 3=Right; anything else is `None`.
    pub fn from_u8(value: u8) -> Option<Direction> {
        Self::ALL.get(value as usize).copied()
    }

    /// Short lowercase name, e.g. `"left"`.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Accepts the direction name or its WASD key, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One cell of the board.
///
/// `value` is 0 for an empty cell, otherwise a power of two >= 2.
/// `blocked` marks a cell that already received a merge during the current
/// move; it is cleared before the next move is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub value: u32,
    pub blocked: bool,
}

impl Tile {
    pub const EMPTY: Tile = Tile { value: 0, blocked: false };

    #[inline]
    pub fn is_empty(self) -> bool {
        self.value == 0
    }
}

/// Owned 4x4 grid of tiles indexed by `(row, col)`.
///
/// Public accessors are bounds-checked and return `EngineError::OutOfBounds`
/// for coordinates outside `[0, 3]`. The move engine and spawner use the
/// crate-private unchecked accessors with coordinates they generate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    tiles: [[Tile; SIZE]; SIZE],
}

impl Board {
    /// A constant empty board.
    pub const EMPTY: Board = Board { tiles: [[Tile::EMPTY; SIZE]; SIZE] };

    /// Build a board from a grid of tile values (merge guards cleared).
    ///
    /// ```
    /// use game_2048::engine::Board;
    /// let b = Board::from_values([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    /// assert_eq!(b.get(3, 3), Ok(4));
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    pub fn from_values(values: Snapshot) -> Self {
        let mut board = Board::EMPTY;
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                board.tiles[row][col].value = value;
            }
        }
        board
    }

    /// Copy out the tile values in row-major order.
    pub fn values(&self) -> Snapshot {
        self.tiles.map(|line| line.map(|tile| tile.value))
    }

    #[inline]
    fn check(row: usize, col: usize) -> Result<(), EngineError> {
        if row < SIZE && col < SIZE {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    /// Value at `(row, col)`; 0 means empty.
    pub fn get(&self, row: usize, col: usize) -> Result<u32, EngineError> {
        Self::check(row, col)?;
        Ok(self.tiles[row][col].value)
    }

    /// Overwrite the value at `(row, col)`. The merge guard is left alone.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), EngineError> {
        Self::check(row, col)?;
        self.tiles[row][col].value = value;
        Ok(())
    }

    /// Full tile (value and merge guard) at `(row, col)`.
    pub fn tile(&self, row: usize, col: usize) -> Result<Tile, EngineError> {
        Self::check(row, col)?;
        Ok(self.tiles[row][col])
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        Self::check(row, col)?;
        Ok(self.tiles[row][col].is_empty())
    }

    /// Clear the merge guard on all 16 tiles.
    pub fn reset_blocked(&mut self) {
        for tile in self.tiles.iter_mut().flatten() {
            tile.blocked = false;
        }
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Tile {
        self.tiles[row][col]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Tile {
        &mut self.tiles[row][col]
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for (row, line) in self.tiles.iter().enumerate() {
            for (col, tile) in line.iter().enumerate() {
                if tile.is_empty() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Count the number of empty cells on the board.
    pub fn count_empty(&self) -> usize {
        self.tiles.iter().flatten().filter(|t| t.is_empty()).count()
    }

    /// Return the highest tile value present (0 on an empty board).
    pub fn highest_tile(&self) -> u32 {
        self.tiles.iter().flatten().map(|t| t.value).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> u64 {
        self.tiles.iter().flatten().map(|t| u64::from(t.value)).sum()
    }

    /// True iff some cell is empty or two orthogonally adjacent cells hold
    /// equal non-zero values. Independent of any direction.
    ///
    /// ```
    /// use game_2048::engine::Board;
    /// let stuck = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    /// assert!(!stuck.can_move());
    /// assert!(Board::EMPTY.can_move());
    /// ```
    pub fn can_move(&self) -> bool {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.tiles[row][col].value;
                if value == 0 {
                    return true;
                }
                if col + 1 < SIZE && self.tiles[row][col + 1].value == value {
                    return true;
                }
                if row + 1 < SIZE && self.tiles[row + 1][col].value == value {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.values()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.tiles.iter().enumerate() {
            if idx > 0 {
                writeln!(f, "-------------------------------")?;
            }
            let cells: Vec<String> = line.iter().map(|t| format_val(t.value)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl From<Snapshot> for Board {
    fn from(values: Snapshot) -> Self {
        Board::from_values(values)
    }
}

fn format_val(val: u32) -> String {
    match val {
        0 => String::from("       "),
        x => format!("{:^7}", x),
    }
}
