//! Ships and their segments.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coordinate;

const INTACT: char = '█';
const DAMAGED: char = '▒';

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Grows along increasing row numbers.
    Vertical,
    /// Grows along increasing column letters.
    Horizontal,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// One cell of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    position: Coordinate,
    destroyed: bool,
}

impl Segment {
    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// A ship of length 1..=4 with segments derived from its origin.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    orientation: Orientation,
    segments: Vec<Segment>,
}

impl Ship {
    /// Ship whose first segment sits at `origin`. Segments may fall off the
    /// board; legality is checked by the fleet.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        let segments = (0..length)
            .map(|i| {
                let step = i8::try_from(i).unwrap_or(i8::MAX);
                let position = match orientation {
                    Orientation::Vertical => origin.shifted(0, step),
                    Orientation::Horizontal => origin.shifted(step, 0),
                };
                Segment {
                    position,
                    destroyed: false,
                }
            })
            .collect();
        Ship {
            origin,
            orientation,
            segments,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Coordinates occupied by this ship, origin first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.segments.iter().map(|s| s.position)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Same ship moved to a new origin, undamaged.
    pub fn moved_to(&self, origin: Coordinate) -> Self {
        Ship::new(origin, self.len(), self.orientation)
    }

    /// Same ship turned around its origin, undamaged.
    pub fn rotated(&self) -> Self {
        Ship::new(self.origin, self.len(), self.orientation.flipped())
    }

    /// Destroy the segment at `coord`. Returns `false` if the ship has no
    /// segment there.
    pub fn hit(&mut self, coord: Coordinate) -> bool {
        match self.segments.iter_mut().find(|s| s.position == coord) {
            Some(segment) => {
                segment.destroyed = true;
                true
            }
            None => false,
        }
    }

    /// A ship is sunk once every segment is destroyed.
    pub fn is_sunk(&self) -> bool {
        self.segments.iter().all(|s| s.destroyed)
    }

    /// On-board fields touching the ship orthogonally or diagonally,
    /// excluding the ship's own cells.
    pub fn buffer(&self) -> Vec<Coordinate> {
        let mut ring = Vec::new();
        for cell in self.cells() {
            for neighbor in cell.orthogonal_neighbors().chain(cell.diagonal_neighbors()) {
                if !self.contains(neighbor) && !ring.contains(&neighbor) {
                    ring.push(neighbor);
                }
            }
        }
        ring
    }

    /// Per-segment damage. Seen by the opponent, a ship shows no damage until
    /// it is sunk.
    pub fn damage(&self, as_opponent: bool) -> Vec<bool> {
        if as_opponent {
            let sunk = self.is_sunk();
            return self.segments.iter().map(|_| sunk).collect();
        }
        self.segments.iter().map(|s| s.destroyed).collect()
    }

    /// Text rendering of [`Ship::damage`], e.g. `█▒▒`.
    pub fn render(&self, as_opponent: bool) -> String {
        self.damage(as_opponent)
            .into_iter()
            .map(|destroyed| if destroyed { DAMAGED } else { INTACT })
            .collect()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, length: {}, orientation: {:?}, damage: {} }}",
            self.origin,
            self.len(),
            self.orientation,
            self.render(false),
        )
    }
}
