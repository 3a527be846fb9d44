use crate::engine::Move;
use crate::logic::rules::{self, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Bitboard = u64;

pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    /// Moves first. Plays the dark discs.
    #[default]
    First,
    Second,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Character used for this side in board diagrams.
    pub const fn symbol(self) -> char {
        match self {
            Self::First => 'X',
            Self::Second => 'O',
        }
    }
}

/// A cell on the grid, `col` and `row` both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "PositionRepr")]
pub struct Position {
    col: u8,
    row: u8,
}

#[derive(Deserialize)]
struct PositionRepr {
    col: u8,
    row: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffBoard {
    pub col: u8,
    pub row: u8,
}

impl fmt::Display for OffBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) is off the board", self.col, self.row)
    }
}

impl std::error::Error for OffBoard {}

impl TryFrom<PositionRepr> for Position {
    type Error = OffBoard;

    fn try_from(repr: PositionRepr) -> Result<Self, Self::Error> {
        Self::new(repr.col, repr.row).ok_or(OffBoard {
            col: repr.col,
            row: repr.row,
        })
    }
}

impl Position {
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// Builds a position from a row-major square index (`row * 8 + col`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(sq: usize) -> Option<Self> {
        if sq < 64 {
            Some(Self {
                col: (sq % 8) as u8,
                row: (sq / 8) as u8,
            })
        } else {
            None
        }
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub const fn bit(self) -> Bitboard {
        1 << self.index()
    }

    /// Neighbour in direction `(dc, dr)`, or `None` off the edge.
    #[must_use]
    pub fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        Self::new(col, row)
    }

    /// Every cell, column by column (all rows of column 0, then column 1, ...).
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|col| (0..BOARD_SIZE).map(move |row| Self { col, row }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.col), self.row + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramError {
    WrongRowCount(usize),
    WrongRowLength { row: usize, len: usize },
    UnknownCell(char),
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount(n) => write!(f, "expected 8 rows, found {n}"),
            Self::WrongRowLength { row, len } => {
                write!(f, "row {row} has {len} cells, expected 8")
            }
            Self::UnknownCell(c) => write!(f, "unknown cell character {c:?}"),
        }
    }
}

impl std::error::Error for DiagramError {}

/// Disc occupancy as one bitboard per side. Bit `row * 8 + col` is set when
/// that side owns the cell. `Clone` is a full copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    first: Bitboard,
    second: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: d4/e5 for `Second`, e4/d5 for `First`.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            first: 0,
            second: 0,
        }
    }

    fn setup_initial_position(&mut self) {
        let cells = [
            (3, 3, Side::Second),
            (4, 4, Side::Second),
            (4, 3, Side::First),
            (3, 4, Side::First),
        ];
        for (col, row, side) in cells {
            if let Some(pos) = Position::new(col, row) {
                self.set_cell(pos, Some(side));
            }
        }
    }

    /// Parses an 8x8 diagram: `X` for `First`, `O` for `Second`, `.` or `-`
    /// for empty. Row 0 comes first. Whitespace inside a row is ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != usize::from(BOARD_SIZE) {
            return Err(DiagramError::WrongRowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != usize::from(BOARD_SIZE) {
                return Err(DiagramError::WrongRowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let side = match ch {
                    'X' | 'x' => Some(Side::First),
                    'O' | 'o' => Some(Side::Second),
                    '.' | '-' => None,
                    other => return Err(DiagramError::UnknownCell(other)),
                };
                if let Some(pos) = Position::from_index(row * 8 + col) {
                    board.set_cell(pos, side);
                }
            }
        }
        Ok(board)
    }

    pub const fn discs(&self, side: Side) -> Bitboard {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    pub const fn occupied(&self) -> Bitboard {
        self.first | self.second
    }

    #[must_use]
    pub const fn cell(&self, pos: Position) -> Option<Side> {
        let bit = pos.bit();
        if self.first & bit != 0 {
            Some(Side::First)
        } else if self.second & bit != 0 {
            Some(Side::Second)
        } else {
            None
        }
    }

    /// Overwrites a single cell without flipping anything.
    pub fn set_cell(&mut self, pos: Position, side: Option<Side>) {
        let bit = pos.bit();
        self.first &= !bit;
        self.second &= !bit;
        match side {
            Some(Side::First) => self.first |= bit,
            Some(Side::Second) => self.second |= bit,
            None => {}
        }
    }

    pub const fn count(&self, side: Side) -> u32 {
        self.discs(side).count_ones()
    }

    pub const fn empty_count(&self) -> u32 {
        self.occupied().count_zeros()
    }

    /// Places `mv` and flips every captured disc. Returns the number flipped.
    ///
    /// The move must be legal for `mv.side`; use [`Board::try_apply`] when
    /// that has not been established.
    pub fn apply(&mut self, mv: Move) -> u32 {
        let captured = rules::flips(self, mv.position, mv.side);
        debug_assert!(
            captured != 0,
            "illegal move {} for {:?}",
            mv.position,
            mv.side
        );
        self.place(mv, captured)
    }

    /// Checked [`Board::apply`]: the board is left untouched on error.
    pub fn try_apply(&mut self, mv: Move) -> Result<u32, MoveError> {
        let captured = rules::check_move(self, mv.position, mv.side)?;
        Ok(self.place(mv, captured))
    }

    fn place(&mut self, mv: Move, captured: Bitboard) -> u32 {
        let placed = mv.position.bit() | captured;
        match mv.side {
            Side::First => {
                self.first |= placed;
                self.second &= !captured;
            }
            Side::Second => {
                self.second |= placed;
                self.first &= !captured;
            }
        }
        captured.count_ones()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = Position::new(col, row)
                    .and_then(|pos| self.cell(pos))
                    .map_or('.', Side::symbol);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
