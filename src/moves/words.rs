//! Word assembly.
//!
//! Words are read off the board as if the new tiles were already placed:
//! from a seed cell, walk backward while cells hold a tile (new or old) to
//! find the start, then forward collecting letters until an empty cell or
//! the edge.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Grid, PlacedTile};
use crate::core::{Coord, Orientation, RejectReason};

use super::placement::Placement;

/// One letter of an assembled word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTile {
    pub coord: Coord,
    pub tile: PlacedTile,
    /// Placed by this move (premiums apply) rather than already on the board.
    pub is_new: bool,
}

/// A contiguous run of tiles along one axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    pub orientation: Orientation,
    pub tiles: SmallVec<[WordTile; 15]>,
}

impl WordSpan {
    /// The letters, in reading order.
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map(|t| t.tile.letter).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// First cell of the word.
    #[must_use]
    pub fn start(&self) -> Option<Coord> {
        self.tiles.first().map(|t| t.coord)
    }

    #[must_use]
    pub fn covers(&self, coord: Coord) -> bool {
        self.tiles.iter().any(|t| t.coord == coord)
    }

    /// True if a tile from before this move is part of the word.
    #[must_use]
    pub fn includes_existing(&self) -> bool {
        self.tiles.iter().any(|t| !t.is_new)
    }
}

/// Every word a move forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly {
    /// The word along the move's own axis.
    pub primary: WordSpan,
    /// Perpendicular words of two or more letters, one per new tile at most.
    pub cross: Vec<WordSpan>,
}

impl Assembly {
    #[must_use]
    pub fn includes_existing(&self) -> bool {
        self.primary.includes_existing() || self.cross.iter().any(WordSpan::includes_existing)
    }
}

/// The grid with a move's tiles overlaid.
struct Overlay<'a> {
    grid: &'a Grid,
    new: FxHashMap<Coord, PlacedTile>,
}

impl Overlay<'_> {
    fn tile_at(&self, coord: Coord) -> Option<WordTile> {
        if let Some(&tile) = self.new.get(&coord) {
            return Some(WordTile {
                coord,
                tile,
                is_new: true,
            });
        }
        self.grid.get(coord).map(|tile| WordTile {
            coord,
            tile,
            is_new: false,
        })
    }

    fn span_through(&self, seed: Coord, orientation: Orientation) -> WordSpan {
        let mut start = seed;
        while let Some(prev) = start.prev(orientation) {
            if self.tile_at(prev).is_none() {
                break;
            }
            start = prev;
        }

        let mut tiles = SmallVec::new();
        let mut cursor = Some(start);
        while let Some(coord) = cursor {
            match self.tile_at(coord) {
                Some(t) => tiles.push(t),
                None => break,
            }
            cursor = coord.next(orientation);
        }

        WordSpan { orientation, tiles }
    }
}

/// Reconstruct the primary word and all cross words of a move.
///
/// The primary word is read through the new tile closest to the start of
/// the axis, so a move with a hole in it yields a primary word that stops
/// short of some new tiles. A single tile is read horizontally, so a tile
/// hooked under a word has a one-letter primary word and the word it
/// completes comes back as a cross word.
pub fn assemble(
    grid: &Grid,
    placements: &[Placement],
    orientation: Orientation,
) -> Result<Assembly, RejectReason> {
    let overlay = Overlay {
        grid,
        new: placements.iter().map(|p| (p.coord, p.placed_tile())).collect(),
    };

    let mut seeds: SmallVec<[Coord; 7]> = placements.iter().map(|p| p.coord).collect();
    seeds.sort_unstable();
    let first = *seeds.first().ok_or(RejectReason::EmptyWord)?;

    let primary = overlay.span_through(first, orientation);
    let cross: Vec<WordSpan> = seeds
        .iter()
        .map(|&seed| overlay.span_through(seed, orientation.perpendicular()))
        .filter(|span| span.len() >= 2)
        .collect();

    if primary.is_empty() {
        return Err(RejectReason::EmptyWord);
    }

    Ok(Assembly { primary, cross })
}
