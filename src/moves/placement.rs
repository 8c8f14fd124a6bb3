//! Placement normalization.
//!
//! Callers hand in loosely-typed [`RawPlacement`]s. Malformed entries are
//! dropped rather than failing the whole move; what survives is checked
//! for emptiness and duplicate cells.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::board::PlacedTile;
use crate::core::{Coord, RejectReason};
use crate::tiles::{normalize_letter, Tile};

/// A tile placement as proposed by a caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlacement {
    pub row: i64,
    pub col: i64,

    /// Letter to show on the board.
    pub letter: String,

    /// Whether a blank is being played for `letter`.
    #[serde(default)]
    pub is_blank: Option<bool>,

    /// Rack entry consumed: `letter` itself or the blank marker. Defaults to
    /// `letter`.
    #[serde(default)]
    pub rack_letter: Option<String>,
}

impl RawPlacement {
    pub fn new(row: i64, col: i64, letter: impl Into<String>) -> Self {
        Self {
            row,
            col,
            letter: letter.into(),
            is_blank: None,
            rack_letter: None,
        }
    }

    /// Mark this placement as a blank standing for its letter.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.is_blank = Some(true);
        self
    }

    /// Name the rack entry consumed explicitly.
    #[must_use]
    pub fn with_rack_letter(mut self, rack_letter: impl Into<String>) -> Self {
        self.rack_letter = Some(rack_letter.into());
        self
    }
}

/// A placement that passed normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub coord: Coord,
    /// Uppercase letter shown on the board.
    pub letter: char,
    pub is_blank: bool,
    /// The rack entry this placement uses up.
    pub rack_tile: Tile,
}

impl Placement {
    /// The tile as it will sit on the board.
    #[must_use]
    pub const fn placed_tile(&self) -> PlacedTile {
        PlacedTile {
            letter: self.letter,
            is_blank: self.is_blank,
        }
    }
}

/// Normalized placements. Seven fit inline, which covers a full rack.
pub type Placements = SmallVec<[Placement; 7]>;

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => normalize_letter(c),
        _ => None,
    }
}

/// Convert one raw placement, or `None` if it is malformed.
fn normalize_one(raw: &RawPlacement) -> Option<Placement> {
    let coord = Coord::try_from_signed(raw.row, raw.col).ok()?;
    let letter = single_letter(&raw.letter)?;
    let flagged_blank = raw.is_blank.unwrap_or(false);

    let rack_tile = if flagged_blank {
        Tile::Blank
    } else {
        match &raw.rack_letter {
            Some(s) => match Tile::parse(s)? {
                // A lettered rack tile can only be placed as itself.
                Tile::Letter(held) if held != letter => return None,
                tile => tile,
            },
            None => Tile::Letter(letter),
        }
    };

    Some(Placement {
        coord,
        letter,
        // Spending a blank always yields a zero-value tile.
        is_blank: rack_tile.is_blank(),
        rack_tile,
    })
}

/// Validate and clean a caller's placements.
///
/// Rules, in order: drop off-board coordinates, drop letters that are not
/// a single `A`-`Z` (case-insensitive), resolve the rack entry, then
/// reject with `NoTiles` if nothing survived or `DuplicatePosition` if two
/// survivors share a cell.
pub fn normalize(raw: &[RawPlacement]) -> Result<Placements, RejectReason> {
    let mut placements = Placements::new();
    for entry in raw {
        match normalize_one(entry) {
            Some(p) => placements.push(p),
            None => trace!(?entry, "dropping malformed placement"),
        }
    }

    if placements.is_empty() {
        return Err(RejectReason::NoTiles);
    }

    let mut seen = FxHashSet::default();
    if !placements.iter().all(|p| seen.insert(p.coord)) {
        return Err(RejectReason::DuplicatePosition);
    }

    Ok(placements)
}
