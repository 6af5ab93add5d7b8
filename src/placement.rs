//! Fleet arrangement before a match: select, move and rotate ships.

use alloc::vec::Vec;
use core::mem;
use rand::Rng;

use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::events::PlacementEvent;
use crate::fleet::Fleet;
use crate::grid::{FieldStatus, Grid};
use crate::ship::Ship;

/// A placement session over one fleet.
#[derive(Debug, Clone)]
pub struct Placement {
    fleet: Fleet,
    events: Vec<PlacementEvent>,
}

impl Placement {
    /// Start from a random fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        Ok(Self::from_fleet(Fleet::random(rng)?))
    }

    pub fn from_fleet(fleet: Fleet) -> Self {
        Self {
            fleet,
            events: Vec::new(),
        }
    }

    pub fn select(&mut self, coord: Coordinate) {
        if !coord.is_on_board() {
            self.events.push(PlacementEvent::InvalidCoordinates);
            return;
        }
        let event = match self.fleet.select_ship(coord) {
            Some(_) => PlacementEvent::ShipSelected,
            None => PlacementEvent::NoShipFound,
        };
        self.events.push(event);
    }

    /// Move the selected ship so that its first segment sits at `coord`.
    pub fn relocate(&mut self, coord: Coordinate) {
        let event = match self.fleet.relocate(coord) {
            Ok(()) => PlacementEvent::ShipMoved,
            Err(BoardError::NoShipSelected) => PlacementEvent::NoShipSelected,
            Err(_) => PlacementEvent::MoveFailed,
        };
        self.events.push(event);
    }

    pub fn rotate(&mut self) {
        let event = match self.fleet.rotate() {
            Ok(()) => PlacementEvent::ShipRotated,
            Err(BoardError::NoShipSelected) => PlacementEvent::NoShipSelected,
            Err(_) => PlacementEvent::RotationFailed,
        };
        self.events.push(event);
    }

    /// Replace the whole fleet with a new random one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.fleet.place_ships_randomly(rng)?;
        self.events.push(PlacementEvent::FleetRandomized);
        Ok(())
    }

    pub fn selected(&self) -> Option<&Ship> {
        self.fleet.selected()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The fleet's grid with the selected ship highlighted.
    pub fn board(&self) -> Grid {
        let mut grid = self.fleet.grid();
        if let Some(ship) = self.fleet.selected() {
            for cell in ship.cells() {
                let _ = grid.set(cell, FieldStatus::Selected);
            }
        }
        grid
    }

    pub fn drain_messages(&mut self) -> Vec<PlacementEvent> {
        mem::take(&mut self.events)
    }

    /// Finish arranging and hand the fleet over for a match.
    pub fn finish(mut self) -> Fleet {
        self.fleet.clear_selection();
        self.fleet
    }
}
