//! # wordgrid-engine
//!
//! Board and move engine for a 15x15 crossword tile game.
//!
//! Given a board, a rack, a bag and a proposed set of tile placements, the
//! engine decides whether the move is legal, reconstructs every word it
//! forms, scores it under the standard premium-square rules and returns
//! the resulting board, rack and bag.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Every operation is a function of its explicit inputs. No
//!    I/O, no global mutable state, nothing retained between calls.
//!
//! 2. **Rejections are values**: An illegal move is ordinary input and
//!    comes back as a [`RejectReason`], never a panic.
//!
//! 3. **All or nothing**: A move is either fully applied to fresh copies
//!    of the state or not applied at all.
//!
//! ## Modules
//!
//! - `core`: Coordinates, configuration, RNG, rejection reasons
//! - `tiles`: Letter catalog, tile bag, racks
//! - `board`: Premium-square map and the grid
//! - `moves`: Normalizer, geometry checks, word assembly, scoring
//! - `rules`: The move engine, state mutation, dictionary seam
//!
//! ## Example
//!
//! ```
//! use wordgrid_engine::{evaluate_move, Grid, Rack, RawPlacement, TileBag};
//!
//! let grid = Grid::new();
//! let rack = Rack::parse("CATSXYZ").unwrap();
//! let bag = TileBag::default();
//!
//! let placements = [
//!     RawPlacement::new(7, 7, "C"),
//!     RawPlacement::new(7, 8, "A"),
//!     RawPlacement::new(7, 9, "T"),
//! ];
//!
//! let accepted = evaluate_move(&grid, &rack, &bag, &placements).unwrap();
//! assert_eq!(accepted.primary.text, "CAT");
//! assert_eq!(accepted.total_score, 5);
//! ```

pub mod core;
pub mod tiles;
pub mod board;
pub mod moves;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BagRng, Coord, EngineConfig, Orientation, RejectReason,
    BOARD_SIZE, CENTER,
};

pub use crate::tiles::{fill_rack, letter_value, new_bag, Rack, Tile, TileBag};

pub use crate::board::{premium_at, Grid, PlacedTile, Premium};

pub use crate::moves::{Placement, RawPlacement, ScoredWord};

pub use crate::rules::{
    evaluate_move, AcceptedMove, MoveEngine, MoveResult, WordOracle,
};
