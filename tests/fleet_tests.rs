mod support;

use fleetfog::{is_placement_legal, BoardError, Fleet, FieldStatus, Grid, Orientation, Ship, FLEET_SIZES};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use support::{c, fixed_fleet};

#[test]
fn test_random_fleet_has_canonical_sizes() {
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = Fleet::random(&mut rng).unwrap();
    assert_eq!(fleet.sizes(), FLEET_SIZES.to_vec());
    assert!(fleet.is_alive());
    assert!(fleet.selected().is_none());
}

#[test]
fn test_random_fleet_is_reproducible() {
    let a = Fleet::random(&mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Fleet::random(&mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_placement_legality() {
    let mut grid = Grid::new();
    let ship = Ship::new(c("a1"), 4, Orientation::Vertical);
    assert!(is_placement_legal(&ship, &grid));
    assert!(!is_placement_legal(&Ship::new(c("a8"), 4, Orientation::Vertical), &grid));
    assert!(!is_placement_legal(&Ship::new(c("h1"), 4, Orientation::Horizontal), &grid));
    grid.set(c("a3"), FieldStatus::Miss).unwrap();
    assert!(!is_placement_legal(&ship, &grid));
}

#[test]
fn test_from_ships_validates() {
    let fleet = fixed_fleet();
    assert_eq!(fleet.sizes(), FLEET_SIZES.to_vec());

    let mut ships: Vec<Ship> = fleet.ships().to_vec();
    ships.pop();
    assert_eq!(Fleet::from_ships(ships).unwrap_err(), BoardError::InvalidFleet);

    // single at i6 moved next to the single at g6
    let mut ships: Vec<Ship> = fleet.ships().to_vec();
    ships[9] = Ship::new(c("h7"), 1, Orientation::Vertical);
    assert_eq!(Fleet::from_ships(ships).unwrap_err(), BoardError::PlacementCollides);
}

#[test]
fn test_select_and_find() {
    let mut fleet = fixed_fleet();
    assert_eq!(fleet.find_ship(c("a3")).map(Ship::len), Some(4));
    assert!(fleet.find_ship(c("b3")).is_none());
    assert_eq!(fleet.select_ship(c("c2")).map(Ship::len), Some(3));
    assert_eq!(fleet.selected().map(Ship::origin), Some(c("c1")));
    assert!(fleet.select_ship(c("j10")).is_none());
    assert!(fleet.selected().is_none());
}

#[test]
fn test_relocate_without_selection() {
    let mut fleet = fixed_fleet();
    assert_eq!(fleet.relocate(c("j10")).unwrap_err(), BoardError::NoShipSelected);
    assert_eq!(fleet.rotate().unwrap_err(), BoardError::NoShipSelected);
}

#[test]
fn test_relocate_commits_legal_move() {
    let mut fleet = fixed_fleet();
    fleet.select_ship(c("c2"));
    fleet.relocate(c("c9")).unwrap_err();
    fleet.relocate(c("e8")).unwrap();
    let moved = fleet.selected().unwrap();
    assert_eq!(moved.origin(), c("e8"));
    assert_eq!(moved.len(), 3);
    assert!(fleet.find_ship(c("c1")).is_none());
    assert_eq!(fleet.find_ship(c("e10")).map(Ship::len), Some(3));
    assert_eq!(fleet.sizes(), FLEET_SIZES.to_vec());
}

#[test]
fn test_relocate_failure_leaves_fleet_unchanged() {
    let mut fleet = fixed_fleet();
    fleet.select_ship(c("c6"));
    let before = fleet.clone();
    // touching the two-ship at a6-a7
    assert_eq!(fleet.relocate(c("b8")).unwrap_err(), BoardError::PlacementCollides);
    // overlapping another ship
    assert_eq!(fleet.relocate(c("e1")).unwrap_err(), BoardError::PlacementCollides);
    // off the board
    assert_eq!(fleet.relocate(c("k1")).unwrap_err(), BoardError::PlacementCollides);
    assert_eq!(fleet, before);
}

#[test]
fn test_relocate_may_overlap_own_old_position() {
    let mut fleet = fixed_fleet();
    fleet.select_ship(c("a1"));
    fleet.relocate(c("a2")).unwrap_err(); // a5 touches a6
    fleet.select_ship(c("g1"));
    fleet.relocate(c("g2")).unwrap();
    assert_eq!(fleet.selected().unwrap().origin(), c("g2"));
}

#[test]
fn test_rotate() {
    let mut fleet = fixed_fleet();
    fleet.select_ship(c("i6"));
    fleet.rotate().unwrap();
    assert_eq!(fleet.selected().unwrap().orientation(), Orientation::Horizontal);

    // a vertical four at a1 would run into c1 when turned
    fleet.select_ship(c("a1"));
    let before = fleet.clone();
    assert_eq!(fleet.rotate().unwrap_err(), BoardError::PlacementCollides);
    assert_eq!(fleet, before);
}

#[test]
fn test_hit_sink_and_alive() {
    let mut fleet = fixed_fleet();
    assert!(!fleet.hit(c("b5")));
    assert!(!fleet.hit(c("g1")));
    assert!(fleet.hit(c("g2")));
    assert!(fleet.find_ship(c("g1")).unwrap().is_sunk());
    assert!(fleet.is_alive());
    assert_eq!(fleet.render(true), "████ ███ ███ ▒▒ ██ ██ █ █ █ █");
    for cell in support::ship_cells(&fleet.clone()) {
        fleet.hit(cell);
    }
    assert!(!fleet.is_alive());
}

#[test]
fn test_fleet_grid() {
    let fleet = fixed_fleet();
    let grid = fleet.grid();
    assert_eq!(grid.count(FieldStatus::Ship), 20);
    assert_eq!(grid.get(c("a4")).unwrap(), FieldStatus::Ship);
    assert_eq!(grid.get(c("a5")).unwrap(), FieldStatus::Empty);
}
