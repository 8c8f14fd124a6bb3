//! The board: premium-square map and the tile grid.

pub mod premium;
pub mod grid;

pub use premium::{premium_at, Premium};
pub use grid::{Grid, PlacedTile};
