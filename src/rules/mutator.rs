//! Producing post-move state.
//!
//! Inputs are borrowed and left as they were; a fresh grid, rack and bag
//! come back so callers can keep the pre-move state.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::RejectReason;
use crate::moves::Placement;
use crate::tiles::{consume, Rack, TileBag};

/// Game pieces after a move has been applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMove {
    pub grid: Grid,
    pub rack: Rack,
    pub bag: TileBag,
}

/// A copy of `grid` with every placement written into its cell.
#[must_use]
pub fn apply_placements(grid: &Grid, placements: &[Placement]) -> Grid {
    grid.with_tiles(placements.iter().map(|p| (p.coord, p.placed_tile())))
}

/// Apply an accepted move: place the tiles, spend them from the rack,
/// then top the rack up to `capacity` from the bag.
pub fn settle(
    grid: &Grid,
    rack: &Rack,
    bag: &TileBag,
    placements: &[Placement],
    capacity: usize,
) -> Result<PostMove, RejectReason> {
    let mut rack = consume(rack, placements)?;
    let mut bag = bag.clone();
    rack.refill_from(&mut bag, capacity);

    Ok(PostMove {
        grid: apply_placements(grid, placements),
        rack,
        bag,
    })
}
