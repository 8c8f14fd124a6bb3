//! Core engine types: coordinates, configuration, RNG, rejection reasons.
//!
//! Everything here is independent of letters and scoring; the tile, board
//! and move modules build on it.

pub mod coord;
pub mod config;
pub mod rng;
pub mod reject;

pub use coord::{Coord, OffBoard, Orientation, BOARD_SIZE, CENTER};
pub use config::{EngineConfig, BINGO_BONUS, RACK_CAPACITY};
pub use rng::BagRng;
pub use reject::RejectReason;
