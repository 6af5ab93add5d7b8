//! Dual board: the owner's ground truth plus what the opponent has learned.

use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::fleet::Fleet;
use crate::grid::{FieldStatus, Grid};
use crate::ship::Ship;

/// Outcome of discovering a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    Miss,
    Hit,
}

/// A data grid owned by the fleet's owner and a visibility grid holding only
/// what the opponent has legitimately discovered or marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualBoard {
    data: Grid,
    visibility: Grid,
}

impl DualBoard {
    /// Board for a placed fleet with nothing discovered yet.
    pub fn from_fleet(fleet: &Fleet) -> Self {
        Self {
            data: fleet.grid(),
            visibility: Grid::new(),
        }
    }

    /// Fire at `coord`. A miss is recorded on both grids; a hit copies `Ship`
    /// to the visibility grid and flags the data cell `Sunk`.
    pub fn discover(&mut self, coord: Coordinate) -> Result<Shot, BoardError> {
        match self.data.get(coord)? {
            FieldStatus::Empty => {
                self.data.set(coord, FieldStatus::Miss)?;
                self.visibility.set(coord, FieldStatus::Miss)?;
                Ok(Shot::Miss)
            }
            FieldStatus::Ship => {
                self.visibility.set(coord, FieldStatus::Ship)?;
                self.data.set(coord, FieldStatus::Sunk)?;
                Ok(Shot::Hit)
            }
            _ => Err(BoardError::AlreadyDiscovered),
        }
    }

    /// Place a manual "probably empty" marker on an undiscovered field.
    pub fn mark_empty(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        if self.visibility.get(coord)? != FieldStatus::Empty {
            return Err(BoardError::CannotMark);
        }
        self.visibility.set(coord, FieldStatus::Miss)
    }

    /// Remove a marker placed by [`DualBoard::mark_empty`].
    pub fn unmark_empty(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        if self.visibility.get(coord)? != FieldStatus::Miss {
            return Err(BoardError::NotMarked);
        }
        self.visibility.set(coord, FieldStatus::Empty)
    }

    /// Reveal the full outline of a destroyed ship on both grids.
    pub fn sink(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            let _ = self.data.set(cell, FieldStatus::Sunk);
            let _ = self.visibility.set(cell, FieldStatus::Sunk);
        }
    }

    /// Mark the buffer ring of a sunk ship as misses on the visibility grid.
    /// The ship's own cells are not part of the ring and keep `Sunk`.
    pub fn auto_mark_around_sunk(&mut self, ship: &Ship) {
        for cell in ship.buffer() {
            if self.visibility.get(cell) == Ok(FieldStatus::Empty) {
                let _ = self.visibility.set(cell, FieldStatus::Miss);
            }
        }
    }

    /// Read-only grid for display. The opponent sees the visibility grid; the
    /// owner sees ground truth with manual markers laid over empty fields.
    pub fn composite(&self, as_opponent: bool) -> Grid {
        if as_opponent {
            return self.visibility;
        }
        let mut view = self.data;
        for (coord, status) in self.visibility.iter() {
            if status == FieldStatus::Miss && self.data.get(coord) == Ok(FieldStatus::Empty) {
                let _ = view.set(coord, FieldStatus::Miss);
            }
        }
        view
    }

    /// `true` while the opponent has learned nothing about `coord`.
    pub fn is_undiscovered(&self, coord: Coordinate) -> bool {
        self.visibility.get(coord) == Ok(FieldStatus::Empty)
    }
}
