//! The shuffled reservoir of undrawn tiles.

use serde::{Deserialize, Serialize};

use super::catalog::{standard_distribution, Tile};
use crate::core::BagRng;

/// Undrawn tiles. Draws come off the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// A complete set in a fresh random order.
    #[must_use]
    pub fn new() -> Self {
        Self::shuffled(&mut BagRng::from_entropy())
    }

    /// A complete set ordered by `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut BagRng) -> Self {
        let mut tiles = standard_distribution();
        rng.shuffle(&mut tiles);
        Self { tiles }
    }

    /// A bag holding exactly `tiles`, front first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining tiles, front first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Remove up to `count` tiles from the front.
    ///
    /// Returns fewer when the bag runs out.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        let take = count.min(self.tiles.len());
        self.tiles.drain(..take).collect()
    }

    /// Encode for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a bag produced by [`TileBag::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
