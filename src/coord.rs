//! Board coordinates: a column letter `a..j` and a row number `1..10`.
//!
//! A `Coordinate` may hold off-board values so that user input can be carried
//! into the engine and rejected there. Conversion to zero-based indices is the
//! single place where bounds are enforced.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Stand-in column for arithmetic that leaves the character range.
const OFF_BOARD_COLUMN: char = '?';

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// A (column, row) pair such as `b5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub column: char,
    pub row: u8,
}

impl Coordinate {
    pub const fn new(column: char, row: u8) -> Self {
        Self { column, row }
    }

    /// Returns `true` when both components are in range.
    pub fn is_on_board(&self) -> bool {
        self.to_index().is_ok()
    }

    /// Zero-based `(row, col)` index of this coordinate.
    pub fn to_index(&self) -> Result<(usize, usize), BoardError> {
        let size = BOARD_SIZE as u32;
        let col = (self.column as u32).wrapping_sub('a' as u32);
        if col >= size || self.row == 0 || self.row > BOARD_SIZE {
            return Err(BoardError::OutOfBounds {
                column: self.column,
                row: self.row,
            });
        }
        Ok((self.row as usize - 1, col as usize))
    }

    /// Inverse of [`Coordinate::to_index`].
    pub fn from_index(row: usize, col: usize) -> Result<Self, BoardError> {
        let size = BOARD_SIZE as usize;
        if row >= size || col >= size {
            return Err(BoardError::OutOfBounds {
                column: u32::try_from(col)
                    .ok()
                    .and_then(|c| c.checked_add('a' as u32))
                    .and_then(char::from_u32)
                    .filter(char::is_ascii_lowercase)
                    .unwrap_or(OFF_BOARD_COLUMN),
                row: u8::try_from(row.saturating_add(1)).unwrap_or(u8::MAX),
            });
        }
        Ok(Self {
            column: (b'a' + col as u8) as char,
            row: row as u8 + 1,
        })
    }

    /// Coordinate moved by `dcol` columns and `drow` rows. The result may be
    /// off the board.
    pub fn shifted(&self, dcol: i8, drow: i8) -> Self {
        let column = (self.column as u32)
            .checked_add_signed(dcol as i32)
            .and_then(char::from_u32)
            .unwrap_or(OFF_BOARD_COLUMN);
        let row = self.row.checked_add_signed(drow).unwrap_or(0);
        Self { column, row }
    }

    /// On-board neighbours sharing an edge with this field.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coordinate> {
        ORTHOGONAL
            .iter()
            .map(move |&(dc, dr)| self.shifted(dc, dr))
            .filter(Coordinate::is_on_board)
    }

    /// On-board neighbours sharing only a corner with this field.
    pub fn diagonal_neighbors(self) -> impl Iterator<Item = Coordinate> {
        DIAGONAL
            .iter()
            .map(move |&(dc, dr)| self.shifted(dc, dr))
            .filter(Coordinate::is_on_board)
    }

    /// Every on-board coordinate, column by column.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        let size = BOARD_SIZE as usize;
        (0..size).flat_map(move |col| {
            (0..size).map(move |row| Coordinate {
                column: (b'a' + col as u8) as char,
                row: row as u8 + 1,
            })
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    /// Parses `b5`, `B5` or `j10`. Letters and numbers outside the board are
    /// accepted and produce an off-board coordinate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let column = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or(BoardError::MalformedCoordinate)?
            .to_ascii_lowercase();
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BoardError::MalformedCoordinate);
        }
        // all ASCII digits, so a failed parse can only mean overflow
        let row = digits.parse::<u8>().unwrap_or(u8::MAX);
        Ok(Self { column, row })
    }
}
