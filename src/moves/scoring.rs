//! Move scoring.
//!
//! Premium squares fire only under tiles placed by the move being scored.
//! Letters already on the board count at face value.

use serde::{Deserialize, Serialize};

use crate::board::premium_at;
use crate::core::{Coord, Orientation};

use super::words::{Assembly, WordSpan};

/// A formed word and what it scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub text: String,
    pub start: Coord,
    pub orientation: Orientation,
    pub score: u32,
}

/// Score breakdown for a whole move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub primary: ScoredWord,
    pub cross: Vec<ScoredWord>,
    /// Bingo bonus awarded, 0 if none.
    pub bonus: u32,
    pub total: u32,
}

/// Score one word.
///
/// Each letter contributes its value times the letter multiplier of its
/// square; the sum is multiplied by the product of the word multipliers.
/// Both multipliers are 1 for tiles that were already on the board.
#[must_use]
pub fn score_word(span: &WordSpan) -> u32 {
    let mut letters = 0;
    let mut word_multiplier = 1;

    for t in &span.tiles {
        let premium = if t.is_new { premium_at(t.coord) } else { None };
        let (letter_mult, word_mult) =
            premium.map_or((1, 1), |p| (p.letter_multiplier(), p.word_multiplier()));
        letters += t.tile.value() * letter_mult;
        word_multiplier *= word_mult;
    }

    letters * word_multiplier
}

fn scored(span: &WordSpan) -> ScoredWord {
    ScoredWord {
        text: span.text(),
        // Assembly never yields an empty span.
        start: span.start().unwrap_or(crate::core::CENTER),
        orientation: span.orientation,
        score: score_word(span),
    }
}

/// Score every word of a move and add `bonus` (the bingo bonus, or 0).
#[must_use]
pub fn score_move(assembly: &Assembly, bonus: u32) -> MoveScore {
    let primary = scored(&assembly.primary);
    let cross: Vec<ScoredWord> = assembly.cross.iter().map(scored).collect();
    let total = primary.score + cross.iter().map(|w| w.score).sum::<u32>() + bonus;

    MoveScore {
        primary,
        cross,
        bonus,
        total,
    }
}
