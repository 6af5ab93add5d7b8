//! Fleet of ten ships: random generation, legality checks, relocation and
//! damage.

use alloc::string::String;
use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::BoardError;
use crate::config::FLEET_SIZES;
use crate::coord::Coordinate;
use crate::grid::{FieldStatus, Grid};
use crate::ship::{Orientation, Ship};

/// Returns `true` when every segment of `ship` is on the board and lands on an
/// `Empty` field of `grid`.
pub fn is_placement_legal(ship: &Ship, grid: &Grid) -> bool {
    ship.cells()
        .all(|cell| matches!(grid.get(cell), Ok(FieldStatus::Empty)))
}

/// Mark the ship's cells and its buffer ring as taken on a scratch grid.
fn reserve(ship: &Ship, grid: &mut Grid) {
    for cell in ship.buffer() {
        let _ = grid.set(cell, FieldStatus::Miss);
    }
    for cell in ship.cells() {
        let _ = grid.set(cell, FieldStatus::Ship);
    }
}

/// Ordered collection of ships with the canonical size multiset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    selected: Option<usize>,
}

impl Fleet {
    /// Freshly generated random fleet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let mut fleet = Fleet {
            ships: Vec::new(),
            selected: None,
        };
        fleet.place_ships_randomly(rng)?;
        Ok(fleet)
    }

    /// Build a fleet from explicit ships. The lengths must match the canonical
    /// sizes and no two ships may touch.
    pub fn from_ships(ships: Vec<Ship>) -> Result<Self, BoardError> {
        let mut lengths: Vec<usize> = ships.iter().map(Ship::len).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        if lengths[..] != FLEET_SIZES[..] {
            return Err(BoardError::InvalidFleet);
        }
        let mut scratch = Grid::new();
        for ship in &ships {
            if !is_placement_legal(ship, &scratch) {
                return Err(BoardError::PlacementCollides);
            }
            reserve(ship, &mut scratch);
        }
        Ok(Fleet {
            ships,
            selected: None,
        })
    }

    /// Regenerate all ships from scratch. Each size, in canonical order, gets a
    /// random orientation and a uniformly chosen origin among those clear of
    /// the edge, earlier ships and their buffers. On failure the fleet is left
    /// untouched.
    pub fn place_ships_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let mut scratch = Grid::new();
        let mut ships = Vec::with_capacity(FLEET_SIZES.len());
        for &size in FLEET_SIZES.iter() {
            let orientation = if rng.random_bool(0.5) {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let candidates: Vec<Coordinate> = Coordinate::all()
                .filter(|&origin| is_placement_legal(&Ship::new(origin, size, orientation), &scratch))
                .collect();
            let origin = *candidates
                .choose(rng)
                .ok_or(BoardError::UnableToPlaceShip { size })?;
            let ship = Ship::new(origin, size, orientation);
            reserve(&ship, &mut scratch);
            ships.push(ship);
        }
        log::debug!("generated random fleet: {:?}", ships);
        self.ships = ships;
        self.selected = None;
        Ok(())
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship lengths in fleet order.
    pub fn sizes(&self) -> Vec<usize> {
        self.ships.iter().map(Ship::len).collect()
    }

    /// Ship occupying `coord`, if any.
    pub fn find_ship(&self, coord: Coordinate) -> Option<&Ship> {
        self.position(coord).map(|i| &self.ships[i])
    }

    fn position(&self, coord: Coordinate) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(coord))
    }

    /// Select the ship at `coord`. Selecting an empty field clears the
    /// selection.
    pub fn select_ship(&mut self, coord: Coordinate) -> Option<&Ship> {
        self.selected = self.position(coord);
        self.selected()
    }

    pub fn selected(&self) -> Option<&Ship> {
        self.selected.map(|i| &self.ships[i])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the selected ship so that its first segment sits at `origin`.
    pub fn relocate(&mut self, origin: Coordinate) -> Result<(), BoardError> {
        let index = self.selected.ok_or(BoardError::NoShipSelected)?;
        let candidate = self.ships[index].moved_to(origin);
        self.replace(index, candidate)
    }

    /// Turn the selected ship around its first segment.
    pub fn rotate(&mut self) -> Result<(), BoardError> {
        let index = self.selected.ok_or(BoardError::NoShipSelected)?;
        let candidate = self.ships[index].rotated();
        self.replace(index, candidate)
    }

    /// Commit `candidate` in place of ship `index` if it fits against every
    /// other ship and its buffer. The fleet is unchanged on failure.
    fn replace(&mut self, index: usize, candidate: Ship) -> Result<(), BoardError> {
        let mut scratch = Grid::new();
        for (i, ship) in self.ships.iter().enumerate() {
            if i != index {
                reserve(ship, &mut scratch);
            }
        }
        if !is_placement_legal(&candidate, &scratch) {
            return Err(BoardError::PlacementCollides);
        }
        self.ships[index] = candidate;
        self.selected = Some(index);
        Ok(())
    }

    /// Destroy the segment at `coord` and report whether its ship is now sunk.
    /// Returns `false` when no ship occupies the field.
    pub fn hit(&mut self, coord: Coordinate) -> bool {
        match self.ships.iter_mut().find(|s| s.contains(coord)) {
            Some(ship) => {
                ship.hit(coord);
                ship.is_sunk()
            }
            None => {
                log::warn!("hit at {} found no ship", coord);
                false
            }
        }
    }

    /// A fleet is alive while any ship has an intact segment.
    pub fn is_alive(&self) -> bool {
        self.ships.iter().any(|s| !s.is_sunk())
    }

    /// Grid with every ship cell set to `Ship`.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new();
        for cell in self.ships.iter().flat_map(Ship::cells) {
            let _ = grid.set(cell, FieldStatus::Ship);
        }
        grid
    }

    /// One-line summary of every ship's condition, e.g. `█▒▒█ ███ ...`.
    pub fn render(&self, as_opponent: bool) -> String {
        let mut out = String::new();
        for (i, ship) in self.ships.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&ship.render(as_opponent));
        }
        out
    }
}
