//! Board coordinates and move orientation.
//!
//! A `Coord` can only be built through a checked constructor, so every
//! coordinate held by the engine is on the 15x15 board.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;

/// The opening anchor. The first move of a game must cover it.
pub const CENTER: Coord = Coord { row: 7, col: 7 };

/// Raised when converting an out-of-range pair into a `Coord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
#[display("({row}, {col}) is off the board")]
pub struct OffBoard {
    pub row: i64,
    pub col: i64,
}

impl std::error::Error for OffBoard {}

/// A cell on the board, `(row, col)` with both in `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if it falls off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a coordinate from caller-supplied signed values.
    pub fn try_from_signed(row: i64, col: i64) -> Result<Self, OffBoard> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => Self::new(r, c).ok_or(OffBoard { row, col }),
            _ => Err(OffBoard { row, col }),
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The neighbouring cell one step forward along `orientation`.
    #[must_use]
    pub fn next(self, orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => Self::new(self.row(), self.col() + 1),
            Orientation::Vertical => Self::new(self.row() + 1, self.col()),
        }
    }

    /// The neighbouring cell one step backward along `orientation`.
    #[must_use]
    pub fn prev(self, orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => Self::new(self.row(), self.col().checked_sub(1)?),
            Orientation::Vertical => Self::new(self.row().checked_sub(1)?, self.col()),
        }
    }

    /// Orthogonal neighbours that are on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [
            self.prev(Orientation::Vertical),
            self.next(Orientation::Vertical),
            self.prev(Orientation::Horizontal),
            self.next(Orientation::Horizontal),
        ]
        .into_iter()
        .flatten()
    }

    /// Iterate over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Coord {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = OffBoard;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::try_from_signed(i64::from(row), i64::from(col))
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a move's tiles run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// All tiles share a row.
    Horizontal,
    /// All tiles share a column.
    Vertical,
}

impl Orientation {
    /// The crossing axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(14, 14).is_some());
        assert!(Coord::new(15, 0).is_none());
        assert!(Coord::new(0, 15).is_none());
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(Coord::try_from_signed(7, 7), Ok(CENTER));
        assert_eq!(
            Coord::try_from_signed(-1, 3),
            Err(OffBoard { row: -1, col: 3 })
        );
        assert!(Coord::try_from_signed(3, 99).is_err());
    }

    #[test]
    fn test_steps_stop_at_edges() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(corner.prev(Orientation::Horizontal), None);
        assert_eq!(corner.prev(Orientation::Vertical), None);
        assert_eq!(corner.next(Orientation::Horizontal), Coord::new(0, 1));
        assert_eq!(corner.next(Orientation::Vertical), Coord::new(1, 0));

        let far = Coord::new(14, 14).unwrap();
        assert_eq!(far.next(Orientation::Horizontal), None);
        assert_eq!(far.next(Orientation::Vertical), None);
    }

    #[test]
    fn test_neighbors() {
        assert_eq!(CENTER.neighbors().count(), 4);
        assert_eq!(Coord::new(0, 0).unwrap().neighbors().count(), 2);
        assert_eq!(Coord::new(0, 5).unwrap().neighbors().count(), 3);
    }

    #[test]
    fn test_all_cells() {
        assert_eq!(Coord::all().count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_serde_rejects_off_board() {
        let json = serde_json::to_string(&CENTER).unwrap();
        assert_eq!(json, "[7,7]");
        assert_eq!(serde_json::from_str::<Coord>(&json).unwrap(), CENTER);
        assert!(serde_json::from_str::<Coord>("[15,0]").is_err());
    }

    #[test]
    fn test_perpendicular() {
        assert_eq!(Orientation::Horizontal.perpendicular(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.perpendicular(), Orientation::Horizontal);
    }
}
