//! Tiles: the letter catalog, the bag, and player racks.
//!
//! The free functions here are the value-in, value-out forms of the rack
//! operations. Inputs are never modified.

pub mod catalog;
pub mod bag;
pub mod rack;

pub use catalog::{
    letter_count, letter_value, normalize_letter, standard_distribution, Tile, BLANK_COUNT,
    BLANK_MARKER, TILE_TOTAL,
};
pub use bag::TileBag;
pub use rack::Rack;

use crate::core::{RejectReason, RACK_CAPACITY};
use crate::moves::Placement;

/// A fresh complete bag in random order.
#[must_use]
pub fn new_bag() -> TileBag {
    TileBag::new()
}

/// Top `rack` up to a full standard rack from the front of `bag`.
///
/// Returns the new rack and what is left in the bag.
#[must_use]
pub fn fill_rack(rack: &Rack, bag: &TileBag) -> (Rack, TileBag) {
    let mut rack = rack.clone();
    let mut bag = bag.clone();
    rack.refill_from(&mut bag, RACK_CAPACITY);
    (rack, bag)
}

/// Remove the rack entry each placement uses: its literal letter, or a
/// blank for a blank placement.
pub fn consume(rack: &Rack, placements: &[Placement]) -> Result<Rack, RejectReason> {
    rack.consume(placements.iter().map(|p| p.rack_tile))
}
