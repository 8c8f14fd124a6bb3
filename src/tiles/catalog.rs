//! Letter values and the standard 100-tile distribution.

use serde::{Deserialize, Serialize};

/// Tiles in a complete set, blanks included.
pub const TILE_TOTAL: usize = 100;

/// Blank tiles in a complete set.
pub const BLANK_COUNT: usize = 2;

/// Character used for a blank on racks and in the bag.
pub const BLANK_MARKER: char = '?';

//                          A  B  C  D  E  F  G  H  I  J  K  L  M  N  O  P   Q  R  S  T  U  V  W  X  Y   Z
const LETTER_VALUES: [u32; 26] = [1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10];
const LETTER_COUNTS: [usize; 26] = [9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1];

const fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some(letter as usize - 'A' as usize)
    } else {
        None
    }
}

/// Uppercase `c` if it is an ASCII letter.
#[must_use]
pub const fn normalize_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}

/// Face value of an uppercase letter. Anything else is worth 0.
#[must_use]
pub const fn letter_value(letter: char) -> u32 {
    match letter_index(letter) {
        Some(i) => LETTER_VALUES[i],
        None => 0,
    }
}

/// Copies of `letter` in a complete set.
#[must_use]
pub const fn letter_count(letter: char) -> usize {
    match letter_index(letter) {
        Some(i) => LETTER_COUNTS[i],
        None => 0,
    }
}

/// A tile as it sits on a rack or in the bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tile {
    /// An uppercase letter `A`-`Z`.
    Letter(char),
    /// A wildcard that can stand for any letter once placed.
    Blank,
}

impl Tile {
    /// Parse a single rack character. Letters are case-insensitive; `?`,
    /// `*` and `_` are accepted as the blank marker.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' | '*' | '_' => Some(Tile::Blank),
            c => normalize_letter(c).map(Tile::Letter),
        }
    }

    /// Parse a string holding exactly one tile character.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Point value: the letter's value, 0 for a blank.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Tile::Letter(c) => letter_value(c),
            Tile::Blank => 0,
        }
    }

    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Tile::Blank)
    }

    /// Rack character for this tile.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Tile::Letter(c) => c,
            Tile::Blank => BLANK_MARKER,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Every tile of a complete set, in alphabetical order with blanks last.
#[must_use]
pub fn standard_distribution() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_TOTAL);
    for letter in 'A'..='Z' {
        tiles.extend(std::iter::repeat(Tile::Letter(letter)).take(letter_count(letter)));
    }
    tiles.extend(std::iter::repeat(Tile::Blank).take(BLANK_COUNT));
    tiles
}
