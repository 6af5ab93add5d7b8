//! Turn-based battle between the player and the computer.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use rand::Rng;

use crate::ai::{Difficulty, TargetingAi};
use crate::board::{DualBoard, Shot};
use crate::common::BoardError;
use crate::config::Settings;
use crate::coord::Coordinate;
use crate::events::Event;
use crate::fleet::Fleet;
use crate::grid::Grid;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    AwaitingStart,
    PlayerTurn,
    EnemyTurn,
    Finished { winner: Side },
}

/// Everything that exists only while a match is running.
struct Sides {
    player_board: DualBoard,
    player_fleet: Fleet,
    enemy_board: DualBoard,
    enemy_fleet: Fleet,
    ai: TargetingAi,
}

/// Match state. All randomness comes from the injected `rng`.
pub struct Battle<R: Rng> {
    rng: R,
    settings: Settings,
    sides: Option<Sides>,
    players_turn: bool,
    winner: Option<Side>,
    events: Vec<Event>,
}

impl<R: Rng> Battle<R> {
    pub fn new(settings: Settings, rng: R) -> Self {
        Self {
            rng,
            settings,
            sides: None,
            players_turn: true,
            winner: None,
            events: Vec::new(),
        }
    }

    /// Replace the settings snapshot. Difficulty takes effect at the next
    /// [`Battle::start`], auto-marking at the next sink.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Begin a match with the player's placed fleet against a fresh random
    /// enemy fleet. Any previous match is discarded.
    pub fn start(&mut self, player_fleet: Fleet) -> Result<(), BoardError> {
        let enemy_fleet = Fleet::random(&mut self.rng)?;
        let difficulty = if self.settings.hard_enemy_targeting {
            Difficulty::Hard
        } else {
            Difficulty::Normal
        };
        let mut player_fleet = player_fleet;
        player_fleet.clear_selection();
        self.sides = Some(Sides {
            player_board: DualBoard::from_fleet(&player_fleet),
            player_fleet,
            enemy_board: DualBoard::from_fleet(&enemy_fleet),
            enemy_fleet,
            ai: TargetingAi::new(difficulty),
        });
        self.players_turn = true;
        self.winner = None;
        self.events.clear();
        self.events.push(Event::YourTurn);
        log::info!("match started, enemy difficulty {:?}", difficulty);
        Ok(())
    }

    /// The player fires at the enemy board.
    pub fn fire(&mut self, coord: Coordinate) {
        let Some(sides) = self.sides.as_mut() else {
            self.events.push(Event::NotStarted);
            return;
        };
        if self.winner.is_some() {
            self.events.push(Event::GameOver);
            return;
        }
        if !self.players_turn {
            self.events.push(Event::NotYourTurn);
            return;
        }
        if !coord.is_on_board() {
            self.events.push(Event::InvalidCoordinates);
            return;
        }
        if !sides.enemy_board.is_undiscovered(coord) {
            self.events.push(Event::AlreadyDiscovered);
            return;
        }
        match sides.enemy_board.discover(coord) {
            Ok(Shot::Miss) => {
                log::debug!("player missed at {}", coord);
                self.players_turn = false;
                self.events.push(Event::PlayerMiss { at: coord });
            }
            Ok(Shot::Hit) => {
                log::debug!("player hit at {}", coord);
                self.events.push(Event::PlayerHit { at: coord });
                if sides.enemy_fleet.hit(coord) {
                    if let Some(ship) = sides.enemy_fleet.find_ship(coord) {
                        sides.enemy_board.sink(ship);
                        if self.settings.mark_misses_around_sunk_ships {
                            sides.enemy_board.auto_mark_around_sunk(ship);
                        }
                    }
                    self.events.push(Event::PlayerSunk { at: coord });
                    self.check_win();
                }
            }
            // A field with a manual marker on the visibility grid is rejected
            // above; anything else reaching here is already discovered.
            Err(_) => self.events.push(Event::AlreadyDiscovered),
        }
    }

    /// Place a "probably empty" marker on the enemy board.
    pub fn mark_field(&mut self, coord: Coordinate) {
        let Some(sides) = self.sides.as_mut() else {
            self.events.push(Event::NotStarted);
            return;
        };
        if !coord.is_on_board() {
            self.events.push(Event::InvalidCoordinates);
            return;
        }
        if sides.enemy_board.mark_empty(coord).is_err() {
            self.events.push(Event::MarkFailed);
        }
    }

    /// Remove a marker placed by [`Battle::mark_field`].
    pub fn unmark_field(&mut self, coord: Coordinate) {
        let Some(sides) = self.sides.as_mut() else {
            self.events.push(Event::NotStarted);
            return;
        };
        if !coord.is_on_board() {
            self.events.push(Event::InvalidCoordinates);
            return;
        }
        if sides.enemy_board.unmark_empty(coord).is_err() {
            self.events.push(Event::UnmarkFailed);
        }
    }

    /// Let the computer take one shot. Does nothing on the player's turn or
    /// once the match is decided.
    pub fn ai_move(&mut self) {
        if self.players_turn || self.winner.is_some() {
            return;
        }
        let Some(sides) = self.sides.as_mut() else {
            return;
        };
        let Some(target) = sides.ai.shoot(&mut self.rng) else {
            log::warn!("computer has no fields left to target");
            self.players_turn = true;
            return;
        };
        match sides.player_board.discover(target) {
            Ok(Shot::Hit) => {
                log::debug!("computer hit at {}", target);
                self.events.push(Event::EnemyHit { at: target });
                let sunk = sides.player_fleet.hit(target);
                sides.ai.react_to_hit(&mut self.rng);
                if sunk {
                    sides.ai.react_to_sink();
                    if let Some(ship) = sides.player_fleet.find_ship(target) {
                        sides.player_board.sink(ship);
                    }
                    self.events.push(Event::EnemySunk { at: target });
                }
                Self::apply_marks(sides);
                if sunk {
                    self.check_win();
                }
            }
            Ok(Shot::Miss) => {
                log::debug!("computer missed at {}", target);
                self.players_turn = true;
                self.events.push(Event::EnemyMiss { at: target });
                Self::apply_marks(sides);
            }
            Err(err) => {
                log::warn!("computer shot at {} rejected: {}", target, err);
                Self::apply_marks(sides);
            }
        }
    }

    fn apply_marks(sides: &mut Sides) {
        for coord in sides.ai.drain_marks() {
            let _ = sides.player_board.mark_empty(coord);
        }
    }

    /// Decide the match if either fleet is destroyed. The win or loss event is
    /// emitted only once.
    pub fn check_win(&mut self) -> Option<Side> {
        if self.winner.is_some() {
            return self.winner;
        }
        let sides = self.sides.as_ref()?;
        let winner = if !sides.player_fleet.is_alive() {
            self.events.push(Event::EnemyWin);
            Side::Enemy
        } else if !sides.enemy_fleet.is_alive() {
            self.events.push(Event::PlayerWin);
            Side::Player
        } else {
            return None;
        };
        log::info!("match finished, winner {:?}", winner);
        self.winner = Some(winner);
        self.winner
    }

    /// Take the events emitted since the last call.
    pub fn drain_messages(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    pub fn players_turn(&self) -> bool {
        self.players_turn
    }

    pub fn won(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn phase(&self) -> Phase {
        match (&self.sides, self.winner) {
            (None, _) => Phase::AwaitingStart,
            (Some(_), Some(winner)) => Phase::Finished { winner },
            (Some(_), None) if self.players_turn => Phase::PlayerTurn,
            (Some(_), None) => Phase::EnemyTurn,
        }
    }

    /// Grid for display: the player's own board in full, the enemy's board as
    /// far as the player has discovered it.
    pub fn board_view(&self, side: Side) -> Option<Grid> {
        let sides = self.sides.as_ref()?;
        Some(match side {
            Side::Player => sides.player_board.composite(false),
            Side::Enemy => sides.enemy_board.composite(true),
        })
    }

    /// Fleet summary for display. Enemy ships show damage only once sunk.
    pub fn fleet_view(&self, side: Side) -> Option<String> {
        let sides = self.sides.as_ref()?;
        Some(match side {
            Side::Player => sides.player_fleet.render(false),
            Side::Enemy => sides.enemy_fleet.render(true),
        })
    }

    /// Ground-truth fleet of either side.
    pub fn fleet(&self, side: Side) -> Option<&Fleet> {
        let sides = self.sides.as_ref()?;
        Some(match side {
            Side::Player => &sides.player_fleet,
            Side::Enemy => &sides.enemy_fleet,
        })
    }

    /// Read-only access to either dual board.
    pub fn board(&self, side: Side) -> Option<&DualBoard> {
        let sides = self.sides.as_ref()?;
        Some(match side {
            Side::Player => &sides.player_board,
            Side::Enemy => &sides.enemy_board,
        })
    }
}
