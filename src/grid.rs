//! The 10x10 field grid.

use alloc::string::{String, ToString};
use core::fmt;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, COLUMNS};
use crate::coord::Coordinate;

const N: usize = BOARD_SIZE as usize;

/// Status of a single field, ordered by how much it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldStatus {
    /// Unknown or unoccupied.
    #[default]
    Empty,
    /// Shot at or marked, no ship.
    Miss,
    /// Undamaged ship segment.
    Ship,
    /// Ship segment known to be destroyed.
    Sunk,
    /// Placement-phase highlight, never a combat result.
    Selected,
}

impl FieldStatus {
    /// Glyph used by [`Grid::render`].
    pub fn glyph(self) -> char {
        match self {
            FieldStatus::Empty => ' ',
            FieldStatus::Miss => '.',
            FieldStatus::Ship => '█',
            FieldStatus::Sunk => '▒',
            FieldStatus::Selected => '#',
        }
    }
}

/// Mapping from every on-board coordinate to exactly one [`FieldStatus`].
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    fields: [[FieldStatus; N]; N],
}

impl Grid {
    /// Grid with every field `Empty`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coordinate) -> Result<FieldStatus, BoardError> {
        let (r, c) = coord.to_index()?;
        Ok(self.fields[r][c])
    }

    pub fn set(&mut self, coord: Coordinate, status: FieldStatus) -> Result<(), BoardError> {
        let (r, c) = coord.to_index()?;
        self.fields[r][c] = status;
        Ok(())
    }

    /// Reset every field to `Empty`.
    pub fn clear(&mut self) {
        self.fields = [[FieldStatus::Empty; N]; N];
    }

    /// Fields in column-major order, `a1` first.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, FieldStatus)> + '_ {
        Coordinate::all().map(move |coord| {
            let (r, c) = (coord.row as usize - 1, (coord.column as u8 - b'a') as usize);
            (coord, self.fields[r][c])
        })
    }

    /// Number of fields with the given status.
    pub fn count(&self, status: FieldStatus) -> usize {
        self.fields
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&s| s == status)
            .count()
    }

    /// Fixed-width text rendering with column letters and row numbers.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for letter in COLUMNS.chars() {
            write!(f, " {}", letter)?;
        }
        writeln!(f)?;
        for (r, row) in self.fields.iter().enumerate() {
            write!(f, "{:2}", r + 1)?;
            for status in row.iter() {
                write!(f, " {}", status.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        fmt::Display::fmt(self, f)
    }
}
