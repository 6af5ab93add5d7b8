#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod events;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, CellSet};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use events::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
