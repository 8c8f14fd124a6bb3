//! The fixed map of premium squares.
//!
//! The layout is symmetric under both mirror axes and the main diagonal,
//! so every cell folds into one octant before lookup. The center cell is
//! the opening anchor and carries no multiplier.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, BOARD_SIZE};

/// A premium square kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Premium {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Premium {
    /// Multiplier applied to the letter placed here.
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            Premium::DoubleWord | Premium::TripleWord => 1,
        }
    }

    /// Multiplier applied to every word through this square.
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            Premium::DoubleLetter | Premium::TripleLetter => 1,
        }
    }
}

const fn fold(row: usize, col: usize) -> (usize, usize) {
    let last = BOARD_SIZE - 1;
    let r = if row > last / 2 { last - row } else { row };
    let c = if col > last / 2 { last - col } else { col };
    if r <= c {
        (r, c)
    } else {
        (c, r)
    }
}

const fn classify(row: usize, col: usize) -> Option<Premium> {
    match fold(row, col) {
        (0, 0) | (0, 7) => Some(Premium::TripleWord),
        (1, 5) | (5, 5) => Some(Premium::TripleLetter),
        (0, 3) | (2, 6) | (3, 7) | (6, 6) => Some(Premium::DoubleLetter),
        (7, 7) => None,
        (a, b) if a == b => Some(Premium::DoubleWord),
        _ => None,
    }
}

const fn build_map() -> [[Option<Premium>; BOARD_SIZE]; BOARD_SIZE] {
    let mut map = [[None; BOARD_SIZE]; BOARD_SIZE];
    let mut row = 0;
    while row < BOARD_SIZE {
        let mut col = 0;
        while col < BOARD_SIZE {
            map[row][col] = classify(row, col);
            col += 1;
        }
        row += 1;
    }
    map
}

static PREMIUM_MAP: [[Option<Premium>; BOARD_SIZE]; BOARD_SIZE] = build_map();

/// Premium kind at `coord`, if any.
#[must_use]
pub fn premium_at(coord: Coord) -> Option<Premium> {
    PREMIUM_MAP[coord.row()][coord.col()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CENTER;

    fn at(row: usize, col: usize) -> Option<Premium> {
        premium_at(Coord::new(row, col).unwrap())
    }

    fn count(kind: Premium) -> usize {
        Coord::all().filter(|&c| premium_at(c) == Some(kind)).count()
    }

    #[test]
    fn test_counts() {
        assert_eq!(count(Premium::TripleWord), 8);
        assert_eq!(count(Premium::DoubleWord), 16);
        assert_eq!(count(Premium::TripleLetter), 12);
        assert_eq!(count(Premium::DoubleLetter), 24);
    }

    #[test]
    fn test_known_squares() {
        assert_eq!(at(0, 0), Some(Premium::TripleWord));
        assert_eq!(at(7, 14), Some(Premium::TripleWord));
        assert_eq!(at(1, 1), Some(Premium::DoubleWord));
        assert_eq!(at(13, 1), Some(Premium::DoubleWord));
        assert_eq!(at(1, 5), Some(Premium::TripleLetter));
        assert_eq!(at(9, 13), Some(Premium::TripleLetter));
        assert_eq!(at(0, 3), Some(Premium::DoubleLetter));
        assert_eq!(at(7, 3), Some(Premium::DoubleLetter));
        assert_eq!(at(8, 2), Some(Premium::DoubleLetter));
        assert_eq!(at(6, 8), Some(Premium::DoubleLetter));
        assert_eq!(at(7, 8), None);
        assert_eq!(premium_at(CENTER), None);
    }

    #[test]
    fn test_symmetry() {
        for c in Coord::all() {
            let (r, k) = (c.row(), c.col());
            assert_eq!(premium_at(c), at(14 - r, k));
            assert_eq!(premium_at(c), at(r, 14 - k));
            assert_eq!(premium_at(c), at(k, r));
        }
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Premium::DoubleLetter.letter_multiplier(), 2);
        assert_eq!(Premium::TripleLetter.letter_multiplier(), 3);
        assert_eq!(Premium::DoubleWord.letter_multiplier(), 1);
        assert_eq!(Premium::DoubleWord.word_multiplier(), 2);
        assert_eq!(Premium::TripleWord.word_multiplier(), 3);
        assert_eq!(Premium::TripleLetter.word_multiplier(), 1);
    }
}
