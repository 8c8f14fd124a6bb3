//! Geometric legality of a move.
//!
//! Checks run in a fixed order and the first failure wins:
//! collinearity, vacancy, then the opening-anchor / connection rule. The
//! connection rule may only be settled once words are assembled, and the
//! gap rule always needs the assembled primary word, so both have
//! follow-up checks on [`Geometry`].

use crate::board::Grid;
use crate::core::{Orientation, RejectReason, CENTER};

use super::placement::Placement;
use super::words::{Assembly, WordSpan};

/// How a move ties into the tiles already on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchoring {
    /// Empty board and the move covers the center cell.
    Opening,
    /// Some new tile sits next to an existing one.
    Adjacent,
    /// Not adjacent; the move is connected only if one of its words runs
    /// through an existing tile.
    ThroughWords,
}

/// Outcome of the pre-assembly checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub orientation: Orientation,
    pub anchoring: Anchoring,
}

/// Orientation shared by every placement. One tile counts as horizontal.
pub fn orientation(placements: &[Placement]) -> Result<Orientation, RejectReason> {
    let first = placements.first().ok_or(RejectReason::NoTiles)?.coord;
    if placements.iter().all(|p| p.coord.row() == first.row()) {
        Ok(Orientation::Horizontal)
    } else if placements.iter().all(|p| p.coord.col() == first.col()) {
        Ok(Orientation::Vertical)
    } else {
        Err(RejectReason::NotInLine)
    }
}

/// Every target cell must be empty.
pub fn check_vacant(grid: &Grid, placements: &[Placement]) -> Result<(), RejectReason> {
    if placements.iter().any(|p| grid.is_occupied(p.coord)) {
        return Err(RejectReason::CellOccupied);
    }
    Ok(())
}

/// Opening moves must cover the center; later moves are classified by
/// whether they touch an existing tile.
pub fn anchoring(grid: &Grid, placements: &[Placement]) -> Result<Anchoring, RejectReason> {
    if grid.is_empty() {
        if placements.iter().any(|p| p.coord == CENTER) {
            Ok(Anchoring::Opening)
        } else {
            Err(RejectReason::FirstMoveNeedsCenter)
        }
    } else if placements.iter().any(|p| grid.has_neighbor(p.coord)) {
        Ok(Anchoring::Adjacent)
    } else {
        Ok(Anchoring::ThroughWords)
    }
}

/// Run the checks that need only the grid and the placements.
pub fn validate(grid: &Grid, placements: &[Placement]) -> Result<Geometry, RejectReason> {
    let orientation = orientation(placements)?;
    check_vacant(grid, placements)?;
    let anchoring = anchoring(grid, placements)?;
    Ok(Geometry {
        orientation,
        anchoring,
    })
}

impl Geometry {
    /// Settle the connection rule once words are known.
    pub fn check_connected(&self, assembly: &Assembly) -> Result<(), RejectReason> {
        match self.anchoring {
            Anchoring::Opening | Anchoring::Adjacent => Ok(()),
            Anchoring::ThroughWords if assembly.includes_existing() => Ok(()),
            Anchoring::ThroughWords => Err(RejectReason::MustConnect),
        }
    }
}

/// Every new tile must lie inside the primary word.
pub fn check_no_gaps(primary: &WordSpan, placements: &[Placement]) -> Result<(), RejectReason> {
    if placements.iter().all(|p| primary.covers(p.coord)) {
        Ok(())
    } else {
        Err(RejectReason::GappedWord)
    }
}
