use fleetfog::{BoardError, Coordinate, FieldStatus, Grid};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.count(FieldStatus::Empty), 100);
    assert!(grid.iter().all(|(_, s)| s == FieldStatus::Empty));
}

#[test]
fn test_set_get_clear() {
    let mut grid = Grid::new();
    let c = Coordinate::new('c', 7);
    grid.set(c, FieldStatus::Ship).unwrap();
    assert_eq!(grid.get(c).unwrap(), FieldStatus::Ship);
    assert_eq!(grid.get(Coordinate::new('c', 8)).unwrap(), FieldStatus::Empty);
    grid.set(c, FieldStatus::Sunk).unwrap();
    assert_eq!(grid.count(FieldStatus::Sunk), 1);
    assert_eq!(grid.count(FieldStatus::Ship), 0);
    grid.clear();
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = Grid::new();
    let off = Coordinate::new('k', 1);
    assert!(matches!(grid.get(off), Err(BoardError::OutOfBounds { .. })));
    assert!(matches!(
        grid.set(off, FieldStatus::Miss),
        Err(BoardError::OutOfBounds { .. })
    ));
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_status_order_by_reveal_level() {
    assert!(FieldStatus::Empty < FieldStatus::Miss);
    assert!(FieldStatus::Miss < FieldStatus::Ship);
    assert!(FieldStatus::Ship < FieldStatus::Sunk);
}

#[test]
fn test_render_layout() {
    let mut grid = Grid::new();
    grid.set(Coordinate::new('a', 1), FieldStatus::Miss).unwrap();
    grid.set(Coordinate::new('b', 1), FieldStatus::Ship).unwrap();
    grid.set(Coordinate::new('c', 1), FieldStatus::Sunk).unwrap();
    grid.set(Coordinate::new('j', 10), FieldStatus::Selected).unwrap();
    let text = grid.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "   a b c d e f g h i j");
    assert_eq!(lines[1], " 1 . █ ▒              ");
    assert_eq!(lines[10], "10                   #");
}
