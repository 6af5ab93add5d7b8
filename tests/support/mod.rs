#![allow(dead_code)]

use fleetfog::{Coordinate, Fleet, Orientation, Ship};

pub fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

/// Legal fleet with every ship vertical:
/// a1-a4, c1-c3, e1-e3, g1-g2, i1-i2, a6-a7 and singles at c6, e6, g6, i6.
pub fn fixed_fleet() -> Fleet {
    let layout = [
        ("a1", 4),
        ("c1", 3),
        ("e1", 3),
        ("g1", 2),
        ("i1", 2),
        ("a6", 2),
        ("c6", 1),
        ("e6", 1),
        ("g6", 1),
        ("i6", 1),
    ];
    let ships = layout
        .iter()
        .map(|&(origin, len)| Ship::new(c(origin), len, Orientation::Vertical))
        .collect();
    Fleet::from_ships(ships).unwrap()
}

/// Every cell occupied by `fleet`.
pub fn ship_cells(fleet: &Fleet) -> Vec<Coordinate> {
    fleet.ships().iter().flat_map(|s| s.cells()).collect()
}

/// On-board cells not occupied by `fleet`.
pub fn water_cells(fleet: &Fleet) -> Vec<Coordinate> {
    Coordinate::all().filter(|&c| fleet.find_ship(c).is_none()).collect()
}
