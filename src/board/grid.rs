//! The 15x15 playing surface.
//!
//! A `Grid` is a plain value: applying a move yields a new grid and the
//! old one stays valid for rollback or logging.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, BOARD_SIZE};
use crate::tiles::letter_value;

/// A tile that has been placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    /// The letter shown, `A`-`Z`.
    pub letter: char,
    /// Placed from a blank: shows `letter` but scores 0.
    pub is_blank: bool,
}

impl PlacedTile {
    #[must_use]
    pub const fn letter(letter: char) -> Self {
        Self {
            letter,
            is_blank: false,
        }
    }

    #[must_use]
    pub const fn blank(letter: char) -> Self {
        Self {
            letter,
            is_blank: true,
        }
    }

    /// Face value; 0 for a blank whatever letter it shows.
    #[must_use]
    pub const fn value(self) -> u32 {
        if self.is_blank {
            0
        } else {
            letter_value(self.letter)
        }
    }
}

/// Board cells, indexed `[row][col]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<PlacedTile>; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<PlacedTile> {
        self.cells[coord.row()][coord.col()]
    }

    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, PlacedTile)> + '_ {
        Coord::all().filter_map(|c| self.get(c).map(|t| (c, t)))
    }

    /// True if any orthogonal neighbour of `coord` holds a tile.
    #[must_use]
    pub fn has_neighbor(&self, coord: Coord) -> bool {
        coord.neighbors().any(|n| self.is_occupied(n))
    }

    /// A copy of this grid with `tiles` written in.
    ///
    /// Callers must have checked the target cells are vacant.
    #[must_use]
    pub fn with_tiles<I>(&self, tiles: I) -> Grid
    where
        I: IntoIterator<Item = (Coord, PlacedTile)>,
    {
        let mut next = self.clone();
        for (coord, tile) in tiles {
            debug_assert!(!next.is_occupied(coord), "overwriting {coord}");
            next.cells[coord.row()][coord.col()] = Some(tile);
        }
        next
    }

    /// Encode for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a grid produced by [`Grid::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl std::fmt::Display for Grid {
    /// One line per row: `.` for empty, blanks in lowercase.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let c = match cell {
                    None => '.',
                    Some(t) if t.is_blank => t.letter.to_ascii_lowercase(),
                    Some(t) => t.letter,
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
