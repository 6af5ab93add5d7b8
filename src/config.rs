//! Fixed board geometry, fleet composition and match settings.

pub const BOARD_SIZE: u8 = 10;

/// Column letters in board order.
pub const COLUMNS: &str = "abcdefghij";

pub const NUM_SHIPS: usize = 10;

/// Canonical ship lengths, largest first. Random fleets are generated in this
/// order and every valid fleet holds exactly this multiset.
pub const FLEET_SIZES: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in a fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Options recognised by a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Mark every cell around a ship the player sinks as a miss.
    pub mark_misses_around_sunk_ships: bool,
    /// Let the computer rank hunt targets instead of picking them at random.
    pub hard_enemy_targeting: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mark_misses_around_sunk_ships: true,
            hard_enemy_targeting: false,
        }
    }
}
