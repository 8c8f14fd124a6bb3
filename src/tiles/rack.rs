//! A player's hand of tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::bag::TileBag;
use super::catalog::Tile;
use crate::core::RejectReason;

/// Up to a rack's capacity of tiles, in the order they were drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    tiles: SmallVec<[Tile; 8]>,
}

impl Rack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rack from characters, e.g. `"CATS??E"`.
    ///
    /// Returns `None` if any character is not a tile.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.chars().map(Tile::from_char).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Sum of the face values of the tiles held. Blanks count 0.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.tiles.iter().map(|t| t.value()).sum()
    }

    /// Draw from the front of `bag` until the rack holds `capacity` tiles
    /// or the bag is empty.
    pub fn refill_from(&mut self, bag: &mut TileBag, capacity: usize) {
        let wanted = capacity.saturating_sub(self.tiles.len());
        self.tiles.extend(bag.draw(wanted));
    }

    /// A copy of this rack with one entry removed per tile in `spent`.
    ///
    /// Fails with `RackMismatch` if any tile is missing; `self` is left
    /// untouched either way.
    pub fn consume<I>(&self, spent: I) -> Result<Rack, RejectReason>
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut remaining = self.clone();
        for tile in spent {
            let pos = remaining
                .tiles
                .iter()
                .position(|&t| t == tile)
                .ok_or(RejectReason::RackMismatch)?;
            remaining.tiles.remove(pos);
        }
        Ok(remaining)
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let rack = Rack::parse("cat?").unwrap();
        assert_eq!(
            rack.tiles(),
            &[Tile::Letter('C'), Tile::Letter('A'), Tile::Letter('T'), Tile::Blank]
        );
        assert_eq!(rack.to_string(), "CAT?");
        assert!(Rack::parse("CA1").is_none());
    }

    #[test]
    fn test_refill_stops_at_capacity() {
        let mut bag = TileBag::from_tiles(Rack::parse("ABCDEFGHIJ").unwrap().tiles().to_vec());
        let mut rack = Rack::parse("XY").unwrap();

        rack.refill_from(&mut bag, 7);
        assert_eq!(rack.to_string(), "XYABCDE");
        assert_eq!(bag.len(), 5);

        rack.refill_from(&mut bag, 7);
        assert_eq!(bag.len(), 5);
    }

    #[test]
    fn test_refill_stops_when_bag_runs_out() {
        let mut bag = TileBag::from_tiles(vec![Tile::Letter('Q')]);
        let mut rack = Rack::new();
        rack.refill_from(&mut bag, 7);
        assert_eq!(rack.to_string(), "Q");
        assert!(bag.is_empty());
    }

    #[test]
    fn test_consume() {
        let rack = Rack::parse("CAT?A").unwrap();
        let left = rack
            .consume([Tile::Letter('A'), Tile::Blank])
            .unwrap();
        assert_eq!(left.to_string(), "CTA");
        assert_eq!(rack.len(), 5);
    }

    #[test]
    fn test_consume_missing_tile() {
        let rack = Rack::parse("CAT").unwrap();
        assert_eq!(
            rack.consume([Tile::Letter('S')]),
            Err(RejectReason::RackMismatch)
        );
        assert_eq!(
            rack.consume([Tile::Letter('A'), Tile::Letter('A')]),
            Err(RejectReason::RackMismatch)
        );
        assert_eq!(rack.consume([Tile::Blank]), Err(RejectReason::RackMismatch));
    }

    #[test]
    fn test_value() {
        assert_eq!(Rack::parse("QZ?").unwrap().value(), 20);
        assert_eq!(Rack::new().value(), 0);
    }
}
