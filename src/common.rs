//! Engine error type shared by the grid, fleet and board layers.

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the 10x10 board.
    OutOfBounds { column: char, row: u8 },
    /// Text could not be read as a column letter followed by a row number.
    MalformedCoordinate,
    /// The field has already been fired upon.
    AlreadyDiscovered,
    /// Only undiscovered fields can be marked as empty.
    CannotMark,
    /// The field carries no empty marker to remove.
    NotMarked,
    /// Relocation or rotation requested with no ship selected.
    NoShipSelected,
    /// The ship would leave the board or touch another ship.
    PlacementCollides,
    /// Ships do not form a legal fleet.
    InvalidFleet,
    /// No legal origin was left for a ship during random generation.
    UnableToPlaceShip { size: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { column, row } => {
                write!(f, "Coordinate {}{} is off the board", column, row)
            }
            BoardError::MalformedCoordinate => write!(f, "Coordinate is malformed"),
            BoardError::AlreadyDiscovered => write!(f, "Field has already been discovered"),
            BoardError::CannotMark => write!(f, "Field cannot be marked as empty"),
            BoardError::NotMarked => write!(f, "Field is not marked as empty"),
            BoardError::NoShipSelected => write!(f, "No ship is selected"),
            BoardError::PlacementCollides => {
                write!(f, "Ship placement collides with the board edge or another ship")
            }
            BoardError::InvalidFleet => write!(f, "Ships do not form a valid fleet"),
            BoardError::UnableToPlaceShip { size } => {
                write!(f, "Unable to place ship of size {}", size)
            }
        }
    }
}
