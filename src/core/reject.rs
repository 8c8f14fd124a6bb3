//! Reasons a proposed move is refused.
//!
//! An illegal move is expected user input, not a fault, so every failure
//! the engine can produce is one of these codes. The engine never retries
//! and never applies part of a rejected move.

use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// Nothing usable was left after dropping malformed placements.
    #[display("no tiles placed")]
    NoTiles,

    /// Two placements target the same cell.
    #[display("two tiles target the same cell")]
    DuplicatePosition,

    /// Placements share neither a row nor a column.
    #[display("tiles must be in a single row or column")]
    NotInLine,

    /// A placement targets a cell that already holds a tile.
    #[display("cell is already occupied")]
    CellOccupied,

    /// The opening move does not cover the center cell.
    #[display("first move must cover the center cell")]
    FirstMoveNeedsCenter,

    /// The move touches no tile already on the board.
    #[display("move must connect to existing tiles")]
    MustConnect,

    /// The new tiles do not form one contiguous word.
    #[display("tiles leave a gap in the word")]
    GappedWord,

    /// Word assembly produced no letters.
    #[display("move forms no word")]
    EmptyWord,

    /// The rack lacks a tile the move needs.
    #[display("rack does not hold the tiles played")]
    RackMismatch,
}

impl std::error::Error for RejectReason {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RejectReason::NotInLine.to_string(), "tiles must be in a single row or column");
        assert_eq!(RejectReason::RackMismatch.to_string(), "rack does not hold the tiles played");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&RejectReason::GappedWord).unwrap();
        assert_eq!(json, "\"GappedWord\"");
        let back: RejectReason = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RejectReason::GappedWord);
    }
}
