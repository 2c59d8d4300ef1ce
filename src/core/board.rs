//! Board and move representation.
//!
//! The board is a fixed array of nine cells, indexed 0-8 row-major:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`. The search engine explores owned copies, so a caller's
//! board is never touched by a search.
//!
//! ## Text form
//!
//! Boards parse from and display as nine symbols: `X`, `O` and `.` for an
//! empty cell. `-` and `_` are also read as empty, and whitespace and `|`
//! are ignored, so a grid can be written across lines:
//!
//! ```
//! use tictac_minimax::core::{Board, Mark, Move};
//!
//! let board: Board = "XX. | OO. | ...".parse().unwrap();
//! assert_eq!(board.get(Move::new(0).unwrap()).mark(), Some(Mark::X));
//! assert_eq!(board.to_string(), "XX.OO....");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::mark::{Cell, Mark};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Error produced when building a board or move from untrusted input.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The text did not contain exactly nine cell symbols.
    #[display("expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty-cell symbol.
    #[display("invalid cell symbol {:?}", _0)]
    InvalidSymbol(char),

    /// A cell index outside 0-8.
    #[display("cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(usize),
}

impl std::error::Error for BoardError {}

/// A cell to claim, 0-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Move(u8);

impl Move {
    /// Create a move, or `None` if the index is off the board.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The board index this move claims.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every cell in ascending index order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT as u8).map(Move)
    }
}

impl TryFrom<usize> for Move {
    type Error = BoardError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Move::new(index).ok_or(BoardError::IndexOutOfRange(index))
    }
}

impl From<Move> for usize {
    fn from(mv: Move) -> usize {
        mv.index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moves available on a board. Never more than nine, so no heap allocation.
pub type MoveList = SmallVec<[Move; CELL_COUNT]>;

/// 3x3 board in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// All cells in index order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The cell a move would claim.
    #[inline]
    #[must_use]
    pub const fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// The cell at a raw index, or `None` if off the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if the cell a move would claim is free.
    #[inline]
    #[must_use]
    pub const fn is_open(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// Put a mark on a cell, overwriting whatever was there.
    ///
    /// Callers are expected to check `is_open` first.
    #[inline]
    pub fn place(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.index()] = Cell::Taken(mark);
    }

    /// A copy of this board with a mark placed.
    #[inline]
    #[must_use]
    pub fn with_move(mut self, mv: Move, mark: Mark) -> Self {
        self.place(mv, mark);
        self
    }

    /// Free cells in ascending index order.
    #[must_use]
    pub fn empty_cells(&self) -> MoveList {
        Move::all().filter(|&mv| self.is_open(mv)).collect()
    }

    /// Check if every cell is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    /// Number of taken cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Multi-line rendering with row separators, for logs and terminals.
    #[must_use]
    pub fn grid(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|c| c.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n---------\n")
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match c {
                '.' | '-' | '_' => Cell::Empty,
                other => Cell::Taken(Mark::from_symbol(other).ok_or(BoardError::InvalidSymbol(other))?),
            };
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(BoardError::WrongLength(count));
        }

        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(i: usize) -> Move {
        Move::new(i).unwrap()
    }

    #[test]
    fn test_move_bounds() {
        assert!(Move::new(0).is_some());
        assert!(Move::new(8).is_some());
        assert!(Move::new(9).is_none());
        assert_eq!(Move::try_from(12), Err(BoardError::IndexOutOfRange(12)));
        assert_eq!(Move::all().count(), 9);
    }

    #[test]
    fn test_with_move_leaves_original() {
        let board = Board::new();
        let next = board.with_move(mv(4), Mark::X);

        assert!(board.is_open(mv(4)));
        assert_eq!(next.get(mv(4)), Cell::Taken(Mark::X));
        assert_eq!(next.filled(), 1);
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board: Board = "X.O.X.O..".parse().unwrap();
        let open: Vec<usize> = board.empty_cells().iter().map(|m| m.index()).collect();
        assert_eq!(open, vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_full_and_counts() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_parse_accepts_separators() {
        let board: Board = "X|O|_\n- . x\no o .".parse().unwrap();
        assert_eq!(board.to_string(), "XO...XOO.");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(BoardError::WrongLength(2)));
        assert_eq!("XOXOXOXOXO".parse::<Board>(), Err(BoardError::WrongLength(10)));
        assert_eq!("XOXOZOXOX".parse::<Board>(), Err(BoardError::InvalidSymbol('Z')));
    }

    #[test]
    fn test_grid() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.grid(), "X | O | .\n---------\n. | . | .\n---------\n. | . | .");
    }

    #[test]
    fn test_serialization() {
        let board: Board = "XO..X...O".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);

        let json = serde_json::to_string(&mv(7)).unwrap();
        assert_eq!(json, "7");
        assert!(serde_json::from_str::<Move>("9").is_err());
    }
}
