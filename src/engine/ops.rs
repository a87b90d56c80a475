use log::trace;

use super::state::{Board, Direction, SIZE};

/// Result of sliding/merging the board in one direction.
///
/// - `moved` is true when any cell value changed.
/// - `score_delta` is the sum of every merged tile produced by the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub moved: bool,
    pub score_delta: u64,
}

/// The cells of one line, ordered from the target edge outward.
type Line = [(usize, usize); SIZE];

/// Slide/merge tiles in place toward the edge named by `direction`. No randomness.
///
/// Merge guards are reset before the first line is touched and are left set
/// on the cells that received a merge, so callers can inspect them until the
/// next move.
///
/// ```
/// use game_2048::engine::{apply_move, Board, Direction};
/// let mut b = Board::from_values([[2, 0, 2, 2], [0; 4], [0; 4], [0; 4]]);
/// let out = apply_move(&mut b, Direction::Left);
/// assert_eq!(b.values()[0], [4, 2, 0, 0]);
/// assert!(out.moved);
/// assert_eq!(out.score_delta, 4);
/// ```
pub fn apply_move(board: &mut Board, direction: Direction) -> MoveOutcome {
    board.reset_blocked();
    let mut outcome = MoveOutcome::default();
    for idx in 0..SIZE {
        let line = line_cells(direction, idx);
        sweep_line(board, &line, &mut outcome);
    }
    trace!(
        "move {direction}: moved={} score_delta={}",
        outcome.moved,
        outcome.score_delta
    );
    outcome
}

/// Like `apply_move` but leaves `board` untouched and returns the result.
pub fn shift(board: &Board, direction: Direction) -> (Board, MoveOutcome) {
    let mut next = *board;
    let outcome = apply_move(&mut next, direction);
    (next, outcome)
}

/// True if moving in `direction` would change the board.
pub fn can_shift(board: &Board, direction: Direction) -> bool {
    shift(board, direction).1.moved
}

/// Line `idx` (a column for vertical moves, a row for horizontal ones),
/// listed from the edge cell outward.
fn line_cells(direction: Direction, idx: usize) -> Line {
    let mut cells = [(0, 0); SIZE];
    for (pos, cell) in cells.iter_mut().enumerate() {
        let far = SIZE - 1 - pos;
        *cell = match direction {
            Direction::Up => (pos, idx),
            Direction::Down => (far, idx),
            Direction::Left => (idx, pos),
            Direction::Right => (idx, far),
        };
    }
    cells
}

/// Process a line in edge-relative order: each cell from position 1 outward
/// is compared with its edge-side neighbor, then the walk continues toward
/// the edge so a tile can slide several cells and merge on arrival.
///
/// Tiles whose double does not fit in a `u32` never merge.
fn sweep_line(board: &mut Board, line: &Line, outcome: &mut MoveOutcome) {
    for start in 1..SIZE {
        let mut pos = start;
        while pos > 0 {
            let (row, col) = line[pos];
            let (n_row, n_col) = line[pos - 1];
            let current = board.cell(row, col);
            let neighbor = board.cell(n_row, n_col);

            let merged = (!neighbor.is_empty()
                && neighbor.value == current.value
                && !neighbor.blocked
                && !current.blocked)
                .then(|| neighbor.value.checked_mul(2))
                .flatten();

            if let Some(merged) = merged {
                board.cell_mut(row, col).value = 0;
                let target = board.cell_mut(n_row, n_col);
                target.value = merged;
                target.blocked = true;
                outcome.score_delta += u64::from(merged);
                outcome.moved = true;
            } else if neighbor.is_empty() && !current.is_empty() {
                board.cell_mut(n_row, n_col).value = current.value;
                board.cell_mut(row, col).value = 0;
                outcome.moved = true;
            }

            pos -= 1;
        }
    }
}
