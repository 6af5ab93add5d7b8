//! Semantic event tokens emitted by the engine.
//!
//! The engine never produces display text; a presentation layer maps these
//! tokens to whatever wording it likes.

use crate::coord::Coordinate;

/// Events appended to the battle log by every mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The match has started and the player moves first.
    YourTurn,
    /// A command arrived before any match was started.
    NotStarted,
    /// The match is decided; the command was ignored.
    GameOver,
    NotYourTurn,
    InvalidCoordinates,
    AlreadyDiscovered,
    /// The player's shot hit an enemy ship.
    PlayerHit { at: Coordinate },
    /// The player's shot completed an enemy ship.
    PlayerSunk { at: Coordinate },
    PlayerMiss { at: Coordinate },
    /// The computer hit one of the player's ships.
    EnemyHit { at: Coordinate },
    EnemySunk { at: Coordinate },
    EnemyMiss { at: Coordinate },
    PlayerWin,
    EnemyWin,
    /// The field could not be marked as empty.
    MarkFailed,
    /// The field carried no marker to remove.
    UnmarkFailed,
}

/// Events emitted while the player arranges a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementEvent {
    ShipSelected,
    NoShipFound,
    NoShipSelected,
    ShipMoved,
    MoveFailed,
    ShipRotated,
    RotationFailed,
    FleetRandomized,
    InvalidCoordinates,
}
