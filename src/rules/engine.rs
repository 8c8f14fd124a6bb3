//! The move engine.
//!
//! One call evaluates one candidate move end to end:
//!
//! 1. normalize the raw placements
//! 2. check collinearity, vacancy and the opening anchor
//! 3. assemble the primary and cross words
//! 4. settle the connection rule and reject gaps
//! 5. score
//! 6. apply to fresh copies of the grid, rack and bag
//!
//! Each stage either hands a complete result to the next or aborts the
//! call with a [`RejectReason`]. Nothing is shared between calls, so moves
//! for different games (or speculative moves for one game) can be
//! evaluated concurrently on their own copies of the state.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::board::Grid;
use crate::core::{EngineConfig, RejectReason};
use crate::moves::{
    assemble, geometry, normalize, score_move, Placements, RawPlacement, ScoredWord,
};
use crate::tiles::{Rack, TileBag};

use super::mutator::settle;
use super::oracle::WordOracle;

/// A move that passed every check, with its score and resulting state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedMove {
    /// The normalized placements that were applied.
    pub placements: Placements,

    /// Word along the move's axis.
    pub primary: ScoredWord,

    /// Perpendicular words formed through new tiles.
    pub cross_words: Vec<ScoredWord>,

    /// Bonus for emptying a full rack; 0 otherwise.
    pub bingo_bonus: u32,

    /// Primary plus cross-word scores plus bonus.
    pub total_score: u32,

    /// Board after the move.
    pub grid: Grid,

    /// Rack after spending the placed tiles and refilling.
    pub rack: Rack,

    /// Bag after refilling the rack.
    pub bag: TileBag,
}

impl AcceptedMove {
    /// Every word formed, primary first.
    pub fn words(&self) -> impl Iterator<Item = &ScoredWord> {
        std::iter::once(&self.primary).chain(&self.cross_words)
    }

    #[must_use]
    pub fn is_bingo(&self) -> bool {
        self.bingo_bonus > 0
    }

    /// Formed words the oracle does not accept.
    ///
    /// An empty result means the move can be committed.
    #[must_use]
    pub fn illegal_words<O: WordOracle + ?Sized>(&self, oracle: &O) -> Vec<&str> {
        self.words()
            .map(|w| w.text.as_str())
            .filter(|w| !oracle.is_legal_word(w))
            .collect()
    }
}

/// Outcome of evaluating a move.
pub type MoveResult = Result<AcceptedMove, RejectReason>;

/// Validates, scores and applies moves under one [`EngineConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveEngine {
    config: EngineConfig,
}

impl MoveEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate `raw` as a move by the holder of `rack` on `grid`.
    ///
    /// On acceptance the returned grid, rack and bag are new values; the
    /// inputs are never modified.
    #[instrument(level = "debug", skip_all, fields(tiles = raw.len(), rack = %rack))]
    pub fn evaluate(&self, grid: &Grid, rack: &Rack, bag: &TileBag, raw: &[RawPlacement]) -> MoveResult {
        match self.run(grid, rack, bag, raw) {
            Ok(accepted) => {
                debug!(
                    word = %accepted.primary.text,
                    cross = accepted.cross_words.len(),
                    score = accepted.total_score,
                    bingo = accepted.is_bingo(),
                    "move accepted"
                );
                Ok(accepted)
            }
            Err(reason) => {
                debug!(%reason, "move rejected");
                Err(reason)
            }
        }
    }

    fn run(&self, grid: &Grid, rack: &Rack, bag: &TileBag, raw: &[RawPlacement]) -> MoveResult {
        let placements = normalize(raw)?;
        trace!(kept = placements.len(), "placements normalized");

        let shape = geometry::validate(grid, &placements)?;
        trace!(?shape, "geometry accepted");

        let assembly = assemble(grid, &placements, shape.orientation)?;
        shape.check_connected(&assembly)?;
        geometry::check_no_gaps(&assembly.primary, &placements)?;

        let capacity = self.config.rack_capacity;
        let bonus = if placements.len() == capacity && rack.len() == capacity {
            self.config.bingo_bonus
        } else {
            0
        };
        let score = score_move(&assembly, bonus);

        let post = settle(grid, rack, bag, &placements, capacity)?;

        Ok(AcceptedMove {
            placements,
            primary: score.primary,
            cross_words: score.cross,
            bingo_bonus: score.bonus,
            total_score: score.total,
            grid: post.grid,
            rack: post.rack,
            bag: post.bag,
        })
    }
}

/// Evaluate a move under the standard rules.
pub fn evaluate_move(grid: &Grid, rack: &Rack, bag: &TileBag, raw: &[RawPlacement]) -> MoveResult {
    MoveEngine::default().evaluate(grid, rack, bag, raw)
}
